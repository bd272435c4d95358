/// Normalizes path separators in a test-file identifier to forward
/// slashes, the form the external runner accepts on every platform.
pub fn normalize_separators(identifier: &str) -> String {
    identifier.replace('\\', "/")
}
