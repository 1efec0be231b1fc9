use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("{}", summary_lines(config).join("\n"));
}

fn summary_lines(config: &ResolvedConfig) -> Vec<String> {
	let mut lines = vec![
		"Effective configuration:".to_string(),
		format!("  Endpoint: {}", config.endpoint),
		format!("  Timeout: {} ms", config.timeout_ms),
		format!("  User agent: {}", config.user_agent),
		format!("  Prompt title: {}", config.input_title),
		format!("  UI theme: {}", config.theme),
		format!("  Log level: {}", config.log_level),
	];
	if config.initial_query.is_empty() {
		lines.push("  Initial query: (none)".to_string());
	} else {
		lines.push(format!("  Initial query: {}", config.initial_query));
	}
	lines
}
