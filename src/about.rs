pub const GENESEARCH_DISPLAY_VERSION: &str = env!("GENESEARCH_DISPLAY_VERSION");
pub const GENESEARCH_BUILD_N: &str = env!("GENESEARCH_BUILD_N");

pub fn version_cli_text() -> String {
    format!(
        "GeneSearch {}\nBuild {}\nRun-length encoded protein search",
        GENESEARCH_DISPLAY_VERSION, GENESEARCH_BUILD_N
    )
}
