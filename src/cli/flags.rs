#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub urandom: bool,
    pub clipboard: bool,
    pub entropy: bool,
    pub save: bool,
    pub no_lower: bool,
    pub no_upper: bool,
    pub no_digits: bool,
    pub no_symbols: bool,
    /// Signed so that `-l -3` reaches the generator as an invalid length
    /// instead of failing to parse.
    pub length: Option<i64>,
    pub number: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<String>,
}
