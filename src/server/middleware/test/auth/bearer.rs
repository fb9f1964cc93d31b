use super::*;

#[test]
fn parses_bearer_header() {
    assert_eq!(
        BearerToken::from_header("Bearer abc.def.ghi").0.as_deref(),
        Some("abc.def.ghi")
    );
}

#[test]
fn ignores_other_schemes() {
    assert_eq!(BearerToken::from_header("Basic YWRtaW46YWRtaW4=").0, None);
    assert_eq!(BearerToken::from_header("Bearer ").0, None);
    assert_eq!(BearerToken::from_header("").0, None);
}

#[test]
fn accepts_bare_token() {
    assert_eq!(
        BearerToken::from_header("abc.def.ghi").0.as_deref(),
        Some("abc.def.ghi")
    );
    assert_eq!(
        BearerToken::from_header("  abc.def.ghi ").0.as_deref(),
        Some("abc.def.ghi")
    );
}
