#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub succeeded: u32,
    pub failed: u32,
}
