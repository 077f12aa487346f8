use super::*;
use core::num::NonZeroU32;

#[test]
fn test_error_conversion() {
    let err = Error::Length {
        context: "Fe::from_canonical_bytes",
        expected: 48,
        actual: 16,
    };
    match CoreError::from(err) {
        CoreError::InvalidLength {
            context,
            expected,
            actual,
        } => {
            assert_eq!(context, "Fe::from_canonical_bytes");
            assert_eq!(expected, 48);
            assert_eq!(actual, 16);
        }
        other => panic!("Expected InvalidLength error, got {:?}", other),
    }

    let err = Error::NonCanonical {
        context: "Fe::from_canonical_bytes",
    };
    assert!(matches!(
        CoreError::from(err),
        CoreError::InvalidParameter {
            context: "Fe::from_canonical_bytes",
            ..
        }
    ));
}

#[test]
fn test_hex_error_becomes_decoding() {
    let err: Error = hex::decode("zz").unwrap_err().into();
    assert!(matches!(err, Error::Decoding { context: "hex", .. }));

    let core = to_core_result::<()>(Err(err), "Fe::set_string").unwrap_err();
    match core {
        CoreError::SerializationError { context, message } => {
            assert_eq!(context, "Fe::set_string");
            assert!(!message.is_empty());
        }
        other => panic!("Expected SerializationError, got {:?}", other),
    }
}

#[test]
fn test_rand_error_becomes_random_source() {
    let code = NonZeroU32::new(rand::Error::CUSTOM_START + 7).unwrap();
    let err: Error = rand::Error::from(code).into();
    assert!(matches!(err, Error::RandomSource { .. }));
    assert!(matches!(
        CoreError::from(err),
        CoreError::RandomGenerationError { .. }
    ));
}
