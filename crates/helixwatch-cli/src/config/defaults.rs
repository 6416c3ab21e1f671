pub struct DefaultsConfig {
    pub dssp_binary: String,
    pub dssp_timeout_secs: u64,
    pub poll_interval_ms: u64,
    pub suspense_secs: u64,
    pub default_duration_secs: u64,
    pub podium_size: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            dssp_binary: "mkdssp".to_string(),
            dssp_timeout_secs: 120,
            poll_interval_ms: 1000,
            suspense_secs: 10,
            default_duration_secs: 30,
            podium_size: 5,
        }
    }
}
