use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use tsctl::mcp::{
    TsctlMcpServer,
    types::{GetConfigParams, ListCatalogsParams},
};

use crate::{DE_CONTEXTS, McpTestFixture, extract_tool_result_json, fixture_es_de};

// ============================================================================
// get_config tests
// ============================================================================

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["config"]["translationsRoot"], "./translations");
    assert_eq!(json_result["config"]["includeUnfinished"], true);
    assert_eq!(json_result["config"]["sourceLanguage"], "en");
    assert!(json_result["config"]["includes"].is_array());
    assert_eq!(json_result["fromFile"], false);
}

#[tokio::test]
async fn test_get_config_from_tsctlrc() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "translationsRoot": "i18n",
            "ignoreContexts": ["QFileDialog"],
            "includeUnfinished": false
        }))
        .unwrap();

    let server = TsctlMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["translationsRoot"], "i18n");
    assert_eq!(json_result["config"]["ignoreContexts"], json!(["QFileDialog"]));
    assert_eq!(json_result["config"]["includeUnfinished"], false);
}

// ============================================================================
// list_catalogs tests
// ============================================================================

#[tokio::test]
async fn test_list_catalogs_progress() {
    let fixture = fixture_es_de().unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    let catalogs = json_result["catalogs"].as_array().unwrap();
    assert_eq!(catalogs.len(), 2);

    let es = catalogs
        .iter()
        .find(|c| c["filePath"] == "translations/vitables_es.ts")
        .unwrap();
    assert_eq!(es["language"], "es");
    assert_eq!(es["messages"], 3);
    assert_eq!(es["finished"], 2);
    assert_eq!(es["unfinished"], 1);
    assert_eq!(es["obsolete"], 1);

    let de = catalogs
        .iter()
        .find(|c| c["filePath"] == "translations/vitables_de.ts")
        .unwrap();
    assert_eq!(de["percentDone"].as_f64(), Some(100.0));

    assert!(json_result["parseErrors"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_list_catalogs_reports_parse_errors() {
    let fixture = McpTestFixture::with_catalogs(vec![("de", DE_CONTEXTS)]).unwrap();
    fixture
        .write_file("translations/broken.ts", "<TS version=\"2.1\"><context>")
        .unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["catalogs"].as_array().unwrap().len(), 1);
    let errors = json_result["parseErrors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0]["rule"], "parse-error");
    assert_eq!(errors[0]["filePath"], "translations/broken.ts");
    assert!(errors[0].get("line").is_none());
}

#[tokio::test]
async fn test_list_catalogs_empty() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsctlMcpServer::new();

    let params = Parameters(ListCatalogsParams {
        project_root_path: fixture.root(),
    });

    let result = server.list_catalogs(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert!(json_result["catalogs"].as_array().unwrap().is_empty());
}
