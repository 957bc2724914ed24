//! Integration tests against the known-good secret strings

mod common;

use ::common::crypto::checksum::{append_checksum, checksum_symbol, validate_checksum};
use ::common::crypto::{Secret, SecretError, SecretKind};

use common::VECTORS;

#[test]
fn test_checksum_vectors() {
    assert_eq!(
        checksum_symbol(b"fFfr3UMHoLqjoXPSaWHRySvijJrKJFPz3X8MtnNAzXT"),
        b'Z'
    );
    assert_eq!(
        checksum_symbol(
            b"ETdSkHLVeNPWfqLTsUDWPCUZqKCzF5qjFJtys8KPT3wdQxgtkxk1WTuvZbZx2WJQ9Pd1DBgs6deoBsTNEgFyXNMh"
        ),
        b'1'
    );
}

#[test]
fn test_every_vector_body_carries_its_checksum() {
    for v in VECTORS {
        for text in [v.owner, v.read_only, v.download_only] {
            let body = &text[2..];
            assert!(validate_checksum(body), "{} failed validation", text);
            assert_eq!(append_checksum(&body[..body.len() - 1]), body);
        }
    }
}

#[test]
fn test_parse_and_format_round_trip() {
    common::init_tracing();

    for v in VECTORS {
        for (text, kind) in [
            (v.owner, SecretKind::Owner),
            (v.read_only, SecretKind::ReadOnly),
            (v.download_only, SecretKind::DownloadOnly),
        ] {
            let secret: Secret = text.parse().unwrap();
            assert_eq!(secret.kind(), kind);
            assert_eq!(secret.to_string(), text);
        }
    }
}

#[test]
fn test_owner() {
    for v in VECTORS {
        assert_eq!(Secret::parse(v.owner).unwrap().owner(), v.owner);
        assert_eq!(Secret::parse(v.read_only).unwrap().owner(), "");
        assert_eq!(Secret::parse(v.download_only).unwrap().owner(), "");
    }
}

#[test]
fn test_read_only() {
    for v in VECTORS {
        assert_eq!(Secret::parse(v.owner).unwrap().read_only(), v.read_only);
        assert_eq!(Secret::parse(v.read_only).unwrap().read_only(), v.read_only);
        assert_eq!(Secret::parse(v.download_only).unwrap().read_only(), "");
    }
}

#[test]
fn test_download_only() {
    for v in VECTORS {
        assert_eq!(
            Secret::parse(v.owner).unwrap().download_only(),
            v.download_only
        );
        assert_eq!(
            Secret::parse(v.read_only).unwrap().download_only(),
            v.download_only
        );
        assert_eq!(
            Secret::parse(v.download_only).unwrap().download_only(),
            v.download_only
        );
    }
}

#[test]
fn test_altered_check_symbol_is_rejected() {
    common::init_tracing();

    let result = Secret::parse("A1fFfr3UMHoLqjoXPSaWHRySvijJrKJFPz3X8MtnNAzXTf");
    assert!(matches!(result, Err(SecretError::ChecksumInvalid)));
}

#[test]
fn test_truncated_vectors_are_rejected() {
    for v in VECTORS {
        let truncated = &v.owner[..v.owner.len() - 1];
        assert!(Secret::parse(truncated).is_err());
    }
}
