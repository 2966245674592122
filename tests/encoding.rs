use urlencode::{pct_enc::EStr, *};

fn dec(kind: Kind, s: &str) -> Vec<u8> {
    unescape(kind, s).unwrap().into_owned()
}

#[test]
fn zone() {
    assert_eq!(escape(Kind::Zone, "eth%1"), "eth%251");
    assert_eq!(dec(Kind::Zone, "eth%251"), b"eth%1");

    // Windows puts spaces in zone identifiers.
    assert_eq!(escape(Kind::Zone, "Local Area Connection"), "Local%20Area%20Connection");
}

#[test]
fn component_specific() {
    assert_eq!(escape(Kind::PathSegment, "a/b"), "a%2Fb");
    assert_eq!(escape(Kind::Path, "a/b"), "a/b");
    assert_eq!(escape(Kind::QueryComponent, "a=b&c"), "a%3Db%26c");
    assert_eq!(escape(Kind::QueryComponent, "a b+c?d#e"), "a%20b%2Bc%3Fd%23e");
    assert_eq!(escape(Kind::Fragment, "sec/2?x#y"), "sec/2?x%23y");
    assert_eq!(escape(Kind::UserPassword, "p@ss:w0rd"), "p%40ss%3Aw0rd");
    assert_eq!(escape(Kind::Host, "bücher.example"), "b%C3%BCcher.example");
    assert_eq!(escape(Kind::Path, "/caf\u{e9} menu"), "/caf%C3%A9%20menu");
}

#[test]
fn malformed() {
    let e = unescape(Kind::QueryComponent, "abc%2").unwrap_err();
    assert_eq!(e.offset(), 3);
    assert_eq!(e.to_string(), "invalid percent-encoded octet at index 3");

    let e = unescape(Kind::QueryComponent, "abc%zz").unwrap_err();
    assert_eq!(e.offset(), 3);

    // The first malformed octet is reported.
    assert_eq!(unescape(Kind::Path, "%41%g1%").unwrap_err().offset(), 3);
    assert_eq!(unescape(Kind::Path, "%4").unwrap_err().offset(), 0);
    assert_eq!(unescape(Kind::Path, "x%").unwrap_err().offset(), 1);
}

#[test]
fn lenient() {
    for kind in Kind::ALL {
        for s in ["", "a b", "a/b?c#d", "ünïcödé", "+&=:@"] {
            assert_eq!(dec(kind, s), s.as_bytes());
        }
    }
}

#[test]
fn case_insensitive_hex() {
    assert_eq!(dec(Kind::Path, "%e6%B5%8b"), "测".as_bytes());
    assert_eq!(dec(Kind::Path, "%2f%2F"), b"//");
}

#[test]
fn round_trip_every_byte() {
    let all: Vec<u8> = (0..=255).collect();
    for kind in Kind::ALL {
        let encoded = escape(kind, &all);
        assert!(encoded.is_ascii());
        assert_eq!(*unescape(kind, &encoded).unwrap(), *all);
    }
}

#[test]
fn buffers() {
    let mut buf = String::from("/files/");
    escape_to(Kind::PathSegment, "a b/c", &mut buf);
    assert_eq!(buf, "/files/a%20b%2Fc");

    let mut buf = Vec::new();
    unescape_to(Kind::PathSegment, "a%20b%2Fc", &mut buf).unwrap();
    unescape_to(Kind::PathSegment, "/d", &mut buf).unwrap();
    assert_eq!(buf, b"a b/c/d");
}

#[test]
fn kinds() {
    assert_eq!(parse_kind("q"), Ok(Kind::QueryComponent));
    assert_eq!(parse_kind("query"), Ok(Kind::QueryComponent));

    let e = parse_kind("x").unwrap_err();
    assert_eq!(e.name(), "x");
    assert_eq!(e.to_string(), r#"invalid encoding: "x""#);

    let pairs = [
        ("s", "path-segment", Kind::PathSegment),
        ("p", "path", Kind::Path),
        ("q", "query", Kind::QueryComponent),
        ("h", "host", Kind::Host),
        ("z", "zone", Kind::Zone),
        ("c", "cred", Kind::UserPassword),
        ("f", "frag", Kind::Fragment),
    ];
    for (alias, name, kind) in pairs {
        assert_eq!(alias.parse(), Ok(kind));
        assert_eq!(name.parse(), Ok(kind));
        assert_eq!(kind.to_string(), name);
    }
}

#[test]
fn safe_sets() {
    for x in *b"&=?#+" {
        assert!(!Kind::QueryComponent.is_safe(x));
    }
    assert!(!Kind::Fragment.is_safe(b'#'));
    assert!(!Kind::UserPassword.is_safe(b':'));
    assert!(!Kind::UserPassword.is_safe(b'@'));
    assert!(Kind::PathSegment.table().is_subset(Kind::Path.table()));
    assert!(Kind::Zone.table().is_subset(Kind::Host.table()));

    for kind in Kind::ALL {
        assert!(!kind.is_safe(b'%'));
        assert!((0x80..=0xff).all(|x| !kind.is_safe(x)));
        assert!(Kind::Zone.table().is_subset(kind.table()));
    }
}

#[test]
fn estr() {
    let s = EStr::new("name=%E5%BC%A0%E4%B8%89").unwrap();
    assert_eq!(s.as_str(), "name=%E5%BC%A0%E4%B8%89");
    assert_eq!(s.decode().to_string().unwrap(), "name=张三");
    assert!(!s.is_unencoded());

    assert_eq!(EStr::new("%2d%").unwrap_err().offset(), 3);
    assert_eq!(EStr::new("%2d%fg").unwrap_err().offset(), 3);
    assert!(EStr::EMPTY.is_empty());
}

#[cfg(feature = "serde")]
#[test]
fn serde() {
    assert_eq!(serde_json::to_string(&Kind::UserPassword).unwrap(), r#""cred""#);
    assert_eq!(serde_json::from_str::<Kind>(r#""z""#).unwrap(), Kind::Zone);
    assert!(serde_json::from_str::<Kind>(r#""ZONE""#).is_err());
}
