use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Effective TLD to the whois server whose output format the registry speaks.
/// Servers without a dedicated descriptor fall through to the default parser.
const ENTRIES: &[(&str, &str)] = &[
    // Generic TLDs (ICANN thick whois)
    ("com", "whois.verisign-grs.com"),
    ("net", "whois.verisign-grs.com"),
    ("org", "whois.pir.org"),
    ("info", "whois.afilias.net"),
    ("biz", "whois.nic.biz"),
    ("xyz", "whois.nic.xyz"),
    ("app", "whois.nic.google"),
    ("dev", "whois.nic.google"),
    ("edu", "whois.educause.edu"),

    // Europe
    ("uk", "whois.nic.uk"),
    ("co.uk", "whois.nic.uk"),
    ("org.uk", "whois.nic.uk"),
    ("me.uk", "whois.nic.uk"),
    ("ltd.uk", "whois.nic.uk"),
    ("plc.uk", "whois.nic.uk"),
    ("de", "whois.denic.de"),
    ("fr", "whois.nic.fr"),
    ("it", "whois.nic.it"),
    ("nl", "whois.domain-registry.nl"),
    ("be", "whois.dns.be"),
    ("eu", "whois.eu"),
    ("at", "whois.nic.at"),
    ("co.at", "whois.nic.at"),
    ("cz", "whois.nic.cz"),
    ("sk", "whois.sk-nic.sk"),
    ("pl", "whois.dns.pl"),
    ("com.pl", "whois.dns.pl"),
    ("se", "whois.iis.se"),
    ("nu", "whois.iis.nu"),
    ("no", "whois.norid.no"),
    ("dk", "whois.dk-hostmaster.dk"),
    ("fi", "whois.fi"),
    ("ee", "whois.tld.ee"),
    ("lv", "whois.nic.lv"),
    ("lu", "whois.dns.lu"),
    ("is", "whois.isnic.is"),
    ("ro", "whois.rotld.ro"),
    ("si", "whois.register.si"),
    ("bg", "whois.register.bg"),
    ("ru", "whois.tcinet.ru"),
    ("su", "whois.tcinet.ru"),
    ("ua", "whois.ua"),
    ("com.ua", "whois.ua"),
    ("pt", "whois.dns.pt"),
    ("com.pt", "whois.dns.pt"),

    // Americas
    ("ca", "whois.cira.ca"),
    ("mx", "whois.mx"),
    ("com.mx", "whois.mx"),
    ("br", "whois.registro.br"),
    ("com.br", "whois.registro.br"),
    ("cl", "whois.nic.cl"),
    ("ar", "whois.nic.ar"),
    ("com.ar", "whois.nic.ar"),
    ("cr", "whois.nic.cr"),
    ("co.cr", "whois.nic.cr"),

    // Asia-Pacific and Middle East
    ("jp", "whois.jprs.jp"),
    ("co.jp", "whois.jprs.jp"),
    ("kr", "whois.kr"),
    ("co.kr", "whois.kr"),
    ("cn", "whois.cnnic.cn"),
    ("com.cn", "whois.cnnic.cn"),
    ("tw", "whois.twnic.net.tw"),
    ("com.tw", "whois.twnic.net.tw"),
    ("th", "whois.thnic.co.th"),
    ("co.th", "whois.thnic.co.th"),
    ("kz", "whois.nic.kz"),
    ("au", "whois.auda.org.au"),
    ("com.au", "whois.auda.org.au"),
    ("nz", "whois.srs.net.nz"),
    ("co.nz", "whois.srs.net.nz"),
    ("tr", "whois.nic.tr"),
    ("com.tr", "whois.nic.tr"),
    ("il", "whois.isoc.org.il"),
    ("co.il", "whois.isoc.org.il"),
    ("ir", "whois.nic.ir"),

    // Africa
    ("ml", "whois.dot.ml"),
    ("tk", "whois.dot.tk"),
    ("ga", "whois.dot.ga"),
    ("cf", "whois.dot.cf"),
    ("gq", "whois.dot.gq"),
    ("tz", "whois.tznic.or.tz"),
    ("co.tz", "whois.tznic.or.tz"),
    ("tn", "whois.ati.tn"),
    ("ug", "whois.co.ug"),
    ("co.ug", "whois.co.ug"),
];

pub static TLD_SERVERS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ENTRIES.iter().copied().collect());

/// Whois server for an effective TLD (`"uk"`, `"co.uk"`), case-insensitive.
pub fn server_for_tld(tld: &str) -> Option<&'static str> {
    let tld = tld.trim().trim_start_matches('.').trim_end_matches('.').to_lowercase();
    TLD_SERVERS.get(tld.as_str()).copied()
}
