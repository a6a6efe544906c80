/// Render candidates for stdout: one per line, or a JSON array of strings
pub fn render_candidates(candidates: &[String], json: bool) -> serde_json::Result<String> {
    if json {
        serde_json::to_string(candidates)
    } else {
        Ok(candidates.join("\n"))
    }
}
