/// How subresource integrity digests are computed for emitted files.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum IntegrityStrategy {
  /// `sha384-{base64}` over the bytes the host holds in memory for the
  /// record.
  #[default]
  ContentSha384,
  /// `sha512-{base64}` over the bytes re-read from the written file, for
  /// hosts that post-process outputs after rendering them.
  FileSha512,
}
