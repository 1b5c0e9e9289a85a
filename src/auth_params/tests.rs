//! # Authentication parameter unit tests
//! Decoding of single parameters and of parameter lists.

use rstest::rstest;
use tls_codec::{Deserialize, Size};

use super::*;
use crate::test_utils::*;

#[test]
fn parse_credential_type() {
    let data = credential_type_bytes(false, 2);
    let param = AuthParam::parse(&mut data.as_slice()).expect("An unexpected error occurred.");
    assert_eq!(param, AuthParam::Credential(CredentialType::standalone(2)));
    assert_eq!(param.param_type(), AuthParamType::CredentialType);
}

#[test]
fn parse_tunneled_credential_type() {
    let data = credential_type_bytes(true, 2);
    let param = AuthParam::parse(&mut data.as_slice()).expect("An unexpected error occurred.");
    assert_eq!(param, AuthParam::Credential(CredentialType::tunneled(2)));
    assert_eq!(
        param.param_type(),
        AuthParamType::TunneledEapMethodCredentialType
    );
}

#[rstest]
#[case(1, AuthParamType::ExpandedEapMethod, vec![0, 0, 0x3a, 0, 0, 0, 21])]
#[case(2, AuthParamType::NonEapInnerAuthType, vec![4])]
#[case(3, AuthParamType::InnerAuthEapMethodType, vec![26])]
#[case(4, AuthParamType::ExpandedInnerEapMethod, vec![0, 0, 0x3a, 0, 0, 0, 26])]
#[case(221, AuthParamType::VendorSpecific, vec![0x50, 0x6f, 0x9a, 1])]
#[case(221, AuthParamType::VendorSpecific, vec![])]
fn parse_opaque(#[case] id: u8, #[case] param_type: AuthParamType, #[case] value: Vec<u8>) {
    let data = auth_param_bytes(id, &value);
    let param = AuthParam::parse(&mut data.as_slice()).expect("An unexpected error occurred.");
    assert_eq!(param.param_type(), param_type);
    assert!(param.as_credential_type().is_none());
    match param {
        AuthParam::Opaque(_, opaque) => assert_eq!(opaque.as_slice(), value.as_slice()),
        AuthParam::Credential(_) => panic!("Expected an opaque parameter."),
    }
}

#[rstest]
#[case(0)]
#[case(7)]
#[case(220)]
#[case(255)]
fn parse_unknown_id(#[case] id: u8) {
    let data = auth_param_bytes(id, &[1]);
    assert_eq!(
        AuthParam::parse(&mut data.as_slice()),
        Err(AuthParamError::UnknownParamType(id))
    );
}

#[rstest]
#[case::no_header(vec![])]
#[case::no_length(vec![5])]
#[case::no_value(vec![5, 1])]
#[case::short_opaque_value(vec![221, 4, 0x50, 0x6f])]
fn parse_truncated(#[case] data: Vec<u8>) {
    assert_eq!(
        AuthParam::parse(&mut data.as_slice()),
        Err(AuthParamError::BufferUnderflow)
    );
}

#[rstest]
#[case(5, 0)]
#[case(5, 2)]
#[case(6, 0)]
#[case(6, 3)]
fn parse_credential_type_with_wrong_length(#[case] id: u8, #[case] length: u8) {
    let data = [id, length, 2, 2, 2];
    let mut bytes = &data[..];
    assert_eq!(
        AuthParam::parse(&mut bytes),
        Err(AuthParamError::MalformedLength {
            expected: 1,
            actual: usize::from(length)
        })
    );
    // Only the header was consumed.
    assert_eq!(bytes, &data[2..]);
}

#[test]
fn tls_deserialize() {
    let data = credential_type_bytes(true, 6);
    let param =
        AuthParam::tls_deserialize(&mut data.as_slice()).expect("An unexpected error occurred.");
    assert_eq!(param, AuthParam::Credential(CredentialType::tunneled(6)));

    assert_eq!(
        AuthParam::tls_deserialize(&mut [5u8].as_slice()),
        Err(tls_codec::Error::EndOfStream)
    );
    assert!(matches!(
        AuthParam::tls_deserialize(&mut [5u8, 0].as_slice()),
        Err(tls_codec::Error::DecodingError(_))
    ));
}

#[test]
fn serialized_len_matches_consumed_bytes() {
    let mut data = credential_type_bytes(false, 3);
    data.extend(auth_param_bytes(221, &[0x50, 0x6f, 0x9a]));

    let mut bytes = data.as_slice();
    let first = AuthParam::parse(&mut bytes).expect("An unexpected error occurred.");
    assert_eq!(first.tls_serialized_len(), 3);
    let second = AuthParam::parse(&mut bytes).expect("An unexpected error occurred.");
    assert_eq!(second.tls_serialized_len(), 5);
    assert!(bytes.is_empty());
}

#[test]
fn parse_list() {
    let mut data = credential_type_bytes(false, 1);
    data.extend(auth_param_bytes(2, &[4]));
    data.extend(credential_type_bytes(true, 7));
    // Trailing bytes belong to whatever follows the list.
    data.push(0xff);

    let mut bytes = data.as_slice();
    let params = AuthParams::parse(&mut bytes, 3).expect("An unexpected error occurred.");
    assert_eq!(params.len(), 3);
    assert_eq!(
        params.credential_type(),
        Some(&CredentialType::standalone(1))
    );
    assert_eq!(
        params.tunneled_credential_type(),
        Some(&CredentialType::tunneled(7))
    );
    assert!(params.contains(AuthParamType::NonEapInnerAuthType));
    assert!(!params.contains(AuthParamType::VendorSpecific));
    assert_eq!(bytes, &[0xff]);
}

#[test]
fn parse_list_with_duplicate() {
    let mut data = credential_type_bytes(true, 1);
    data.extend(credential_type_bytes(true, 2));
    assert_eq!(
        AuthParams::parse(&mut data.as_slice(), 2),
        Err(AuthParamError::Duplicate(
            AuthParamType::TunneledEapMethodCredentialType
        ))
    );
}

#[test]
fn parse_list_too_short() {
    let data = credential_type_bytes(false, 1);
    assert_eq!(
        AuthParams::parse(&mut data.as_slice(), 2),
        Err(AuthParamError::BufferUnderflow)
    );
}

#[test]
fn add() {
    let mut params = AuthParams::empty();
    params
        .add(AuthParam::Credential(CredentialType::standalone(1)))
        .unwrap();
    params
        .add(AuthParam::Credential(CredentialType::tunneled(1)))
        .unwrap();
    assert_eq!(
        params.add(AuthParam::Credential(CredentialType::standalone(2))),
        Err(AuthParamError::Duplicate(AuthParamType::CredentialType))
    );
    assert_eq!(params.len(), 2);
    assert_eq!(params.credential_type().map(|c| c.value()), Some(1));
}

#[test]
fn add_multi_and_try_from() {
    let x = AuthParam::Credential(CredentialType::standalone(1));
    let y = AuthParam::Credential(CredentialType::tunneled(1));
    let z = AuthParam::Opaque(AuthParamType::VendorSpecific, OpaqueAuthParam::new(&[1]));

    let tests = [
        (vec![], true),
        (vec![x.clone()], true),
        (vec![x.clone(), y.clone()], true),
        (vec![x.clone(), y.clone(), z.clone()], true),
        (vec![x.clone(), x.clone()], false),
        (vec![y.clone(), x.clone(), y.clone()], false),
        (vec![z.clone(), z.clone()], false),
        (vec![x, z, y.clone(), y], false),
    ];

    for (test, should_work) in tests.into_iter() {
        {
            let mut params = AuthParams::empty();
            let mut works = true;
            for param in test.iter() {
                match params.add(param.clone()) {
                    Ok(_) => {}
                    Err(AuthParamError::Duplicate(_)) => works = false,
                    Err(e) => panic!("Unexpected error {e:?}"),
                }
            }
            assert_eq!(works, should_work);
        }

        assert_eq!(AuthParams::multi(test.clone()).is_ok(), should_work);
        assert_eq!(AuthParams::try_from(test).is_ok(), should_work);
    }
}

#[test]
fn too_many_params() {
    let params = vec![
        AuthParam::Opaque(AuthParamType::VendorSpecific, OpaqueAuthParam::new(&[]));
        Config::max_auth_params() + 1
    ];
    assert_eq!(
        AuthParams::validate(&params),
        Err(AuthParamError::TooManyParams(Config::max_auth_params()))
    );
}

#[rstest]
#[case(AuthParamType::CredentialType)]
#[case(AuthParamType::TunneledEapMethodCredentialType)]
fn opaque_param_of_decoded_type(#[case] param_type: AuthParamType) {
    let opaque = AuthParam::Opaque(param_type, OpaqueAuthParam::new(&[1, 2, 3]));

    let mut params = AuthParams::empty();
    assert_eq!(
        params.add(opaque.clone()),
        Err(AuthParamError::OpaqueDecodedType(param_type))
    );
    assert!(!params.contains(param_type));

    // The typed parameter is still accepted afterwards.
    params
        .add(AuthParam::Credential(CredentialType::standalone(1)))
        .unwrap();
    params
        .add(AuthParam::Credential(CredentialType::tunneled(1)))
        .unwrap();

    assert_eq!(
        AuthParams::multi(vec![opaque]),
        Err(AuthParamError::OpaqueDecodedType(param_type))
    );
}

#[test]
fn truncated_opaque_value_consumes_the_rest() {
    let data = [221u8, 4, 0x50, 0x6f];
    let mut bytes = &data[..];
    assert_eq!(
        AuthParam::parse(&mut bytes),
        Err(AuthParamError::BufferUnderflow)
    );
    assert!(bytes.is_empty());
}

#[test]
fn serde_round_trip_keeps_params() {
    let params = AuthParams::multi(vec![
        AuthParam::Credential(CredentialType::standalone(1)),
        AuthParam::Credential(CredentialType::tunneled(7)),
    ])
    .unwrap();
    let json = serde_json::to_string(&params).expect("An unexpected error occurred.");
    let decoded: AuthParams = serde_json::from_str(&json).expect("An unexpected error occurred.");
    assert_eq!(decoded, params);
}

#[test]
fn serde_rejects_duplicates() {
    let json = r#"[{"Credential":{"kind":"Standalone","value":1}},{"Credential":{"kind":"Standalone","value":2}}]"#;
    assert!(serde_json::from_str::<AuthParams>(json).is_err());

    let json = r#"[{"Opaque":["CredentialType",[1,2,3]]}]"#;
    assert!(serde_json::from_str::<AuthParams>(json).is_err());
}
