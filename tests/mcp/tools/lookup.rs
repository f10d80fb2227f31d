use rmcp::handler::server::wrapper::Parameters;
use tsctl::mcp::{TsctlMcpServer, types::LookupTranslationParams};

use crate::{McpTestFixture, extract_tool_result_json, fixture_es_de};

fn lookup_params(
    fixture: &McpTestFixture,
    file: &str,
    context: &str,
    source: &str,
) -> LookupTranslationParams {
    LookupTranslationParams {
        project_root_path: fixture.root(),
        file: file.to_string(),
        context: context.to_string(),
        source: source.to_string(),
        comment: None,
        count: None,
    }
}

// ============================================================================
// lookup_translation tests
// ============================================================================

#[tokio::test]
async fn test_lookup_translated() {
    let fixture = fixture_es_de().unwrap();
    let server = TsctlMcpServer::new();

    let params = lookup_params(&fixture, "translations/vitables_de.ts", "VTGUI", "Close");
    let result = server.lookup_translation(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Schließen");
    assert_eq!(json_result["translated"], true);
}

#[tokio::test]
async fn test_lookup_falls_back_to_source() {
    let fixture = fixture_es_de().unwrap();
    let server = TsctlMcpServer::new();

    // Unfinished without text, then obsolete.
    for source in ["Close", "Quit"] {
        let params = lookup_params(&fixture, "translations/vitables_es.ts", "VTGUI", source);
        let result = server.lookup_translation(Parameters(params)).await.unwrap();
        let json_result = extract_tool_result_json(&result);

        assert_eq!(json_result["text"], source);
        assert_eq!(json_result["translated"], false);
    }
}

#[tokio::test]
async fn test_lookup_absolute_path_and_comment_fallback() {
    let fixture = fixture_es_de().unwrap();
    let server = TsctlMcpServer::new();

    let file = fixture
        .root_path()
        .join("translations/vitables_de.ts")
        .to_string_lossy()
        .to_string();
    let mut params = lookup_params(&fixture, &file, "VTGUI", "Close");
    params.comment = Some("window".to_string());

    let result = server.lookup_translation(Parameters(params)).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["text"], "Schließen");
}

#[tokio::test]
async fn test_lookup_plural() {
    let fixture = McpTestFixture::with_catalogs(vec![(
        "pl",
        r#"<context>
    <name>VTGUI</name>
    <message numerus="yes">
        <source>%n node(s)</source>
        <translation>
            <numerusform>%n węzeł</numerusform>
            <numerusform>%n węzły</numerusform>
            <numerusform>%n węzłów</numerusform>
        </translation>
    </message>
</context>"#,
    )])
    .unwrap();
    let server = TsctlMcpServer::new();

    let mut params = lookup_params(&fixture, "translations/vitables_pl.ts", "VTGUI", "%n node(s)");
    params.count = Some(22);
    let result = server.lookup_translation(Parameters(params)).await.unwrap();

    assert_eq!(extract_tool_result_json(&result)["text"], "22 węzły");
}

#[tokio::test]
async fn test_lookup_missing_catalog() {
    let fixture = McpTestFixture::new().unwrap();
    let server = TsctlMcpServer::new();

    let params = lookup_params(&fixture, "translations/nope.ts", "VTGUI", "Close");
    let result = server.lookup_translation(Parameters(params)).await;

    assert!(result.is_err());
}
