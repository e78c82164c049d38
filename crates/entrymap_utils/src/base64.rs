/// Standard-alphabet base64 with padding, the encoding subresource integrity
/// digests are expressed in.
pub fn to_standard_base64(input: impl AsRef<[u8]>) -> String {
  base64_simd::STANDARD.encode_to_string(input)
}

#[test]
fn test_to_standard_base64() {
  assert_eq!(to_standard_base64(b"hello"), "aGVsbG8=");
  assert_eq!(to_standard_base64(b""), "");
}
