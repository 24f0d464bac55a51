use std::cell::RefCell;
use std::path::{Path, PathBuf};

use clap::Parser;

use proposal_cli::{Cli, run};
use proposal_core::{ConfigError, Variant};
use proposal_export::{DocumentRenderer, ExportError};

/// Stand-in for weasyprint: keeps the markup and writes a stub file.
#[derive(Default)]
struct RecordingRenderer {
    markup: RefCell<Option<String>>,
    base_dir: RefCell<Option<PathBuf>>,
}

impl DocumentRenderer for RecordingRenderer {
    fn render_pdf(&self, markup: &str, base_dir: &Path, output: &Path) -> Result<(), ExportError> {
        *self.markup.borrow_mut() = Some(markup.to_string());
        *self.base_dir.borrow_mut() = Some(base_dir.to_path_buf());
        std::fs::write(output, b"%PDF-1.7\n").map_err(|e| ExportError::Backend(e.to_string()))
    }
}

struct FailingRenderer;

impl DocumentRenderer for FailingRenderer {
    fn render_pdf(&self, _: &str, _: &Path, _: &Path) -> Result<(), ExportError> {
        Err(ExportError::Backend("weasyprint exited with exit status: 1".to_string()))
    }
}

fn cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("proposal").chain(args.iter().copied())).unwrap()
}

#[test]
fn parses_flags() {
    let cli = cli(&[
        "--variant",
        "full-scope",
        "--json",
        "client.json",
        "--client",
        "Jane Doe",
        "--total",
        "$150,000",
        "--output",
        "out.pdf",
    ]);

    assert_eq!(cli.variant, Variant::FullScope);
    assert_eq!(cli.data_file, Some(PathBuf::from("client.json")));

    let overrides = cli.overrides();
    assert_eq!(overrides.client_name.as_deref(), Some("Jane Doe"));
    assert_eq!(overrides.project_total.as_deref(), Some("$150,000"));
    assert_eq!(overrides.client_address, None);
    assert_eq!(overrides.proposal_date, None);
    assert_eq!(overrides.output_path, Some(PathBuf::from("out.pdf")));
}

#[test]
fn defaults_without_flags() {
    let cli = cli(&[]);
    assert_eq!(cli.variant, Variant::Standard);
    assert!(cli.overrides().is_empty());
    assert_eq!(cli.out_dir, PathBuf::from("."));
    assert_eq!(cli.base_url, PathBuf::from("."));
}

#[test]
fn unknown_variant_is_rejected() {
    assert!(Cli::try_parse_from(["proposal", "--variant", "brochure"]).is_err());
}

#[test]
fn renders_to_derived_path_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();
    let cli = cli(&["--client", "Jane Doe", "--out-dir", out_dir]);
    let renderer = RecordingRenderer::default();
    let mut stdout: Vec<u8> = Vec::new();

    let output = run(&cli, &renderer, &mut stdout).unwrap();

    assert_eq!(output, dir.path().join("DCB_Proposal_Jane_Doe.pdf"));
    assert!(output.exists());
    assert_eq!(renderer.base_dir.borrow().as_deref(), Some(Path::new(".")));

    let report = String::from_utf8(stdout).unwrap();
    assert!(report.contains("Client  : Jane Doe"));
    assert!(report.contains("Total   : $298,800"));
    assert!(report.contains(&format!("Output  : {}", output.display())));
    assert!(report.contains("Done! Saved to:"));

    let markup = renderer.markup.borrow().clone().unwrap();
    assert!(markup.contains(r#"<div class="cover-client">Jane Doe</div>"#));
}

#[test]
fn data_file_and_flags_flow_into_document() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("client.json");
    std::fs::write(
        &data,
        r#"{"project_total": "$150,000", "payments": [["Down payment", "$1,000"], ["Final", "$2,000"]]}"#,
    )
    .unwrap();
    let output = dir.path().join("proposal.pdf");

    let cli = cli(&[
        "--variant",
        "full-scope",
        "--json",
        data.to_str().unwrap(),
        "--client",
        "A & B's <Co>",
        "--output",
        output.to_str().unwrap(),
    ]);
    let renderer = RecordingRenderer::default();

    let written = run(&cli, &renderer, &mut std::io::sink()).unwrap();
    assert_eq!(written, output);

    let markup = renderer.markup.borrow().clone().unwrap();
    assert!(markup.contains("A &amp; B&#x27;s &lt;Co&gt;"));
    assert!(markup.contains("Project Total: $150,000"));
    assert!(markup.contains(r#"<span class="pay-num">2.</span><span>Final: $2,000</span>"#));
    assert!(!markup.contains(r#"<span class="pay-num">3.</span>"#));
}

#[test]
fn config_errors_name_the_stage() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    let cli = cli(&["--json", missing.to_str().unwrap()]);
    let renderer = RecordingRenderer::default();

    let err = run(&cli, &renderer, &mut std::io::sink()).unwrap_err();

    assert_eq!(err.to_string(), "failed to resolve proposal configuration");
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Load { .. })
    ));
    assert!(renderer.markup.borrow().is_none());
}

#[test]
fn shape_errors_surface_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("client.json");
    std::fs::write(&data, r#"{"payments": [["only one"]]}"#).unwrap();
    let cli = cli(&["--json", data.to_str().unwrap()]);

    let err = run(&cli, &RecordingRenderer::default(), &mut std::io::sink()).unwrap_err();
    match err.downcast_ref::<ConfigError>() {
        Some(ConfigError::Shape { field, .. }) => assert_eq!(field, "payments"),
        other => panic!("expected shape error, got {other:?}"),
    }
}

#[test]
fn renderer_errors_name_the_stage() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("proposal.pdf");
    let cli = cli(&["--output", output.to_str().unwrap()]);

    let err = run(&cli, &FailingRenderer, &mut std::io::sink()).unwrap_err();

    assert_eq!(err.to_string(), "failed to render proposal PDF");
    assert!(matches!(
        err.downcast_ref::<ExportError>(),
        Some(ExportError::Backend(_))
    ));
    assert!(!output.exists());
}

#[test]
fn empty_output_flag_is_rejected() {
    // clap's path parser refuses empty values, so `--output ""` never
    // reaches the resolver as an empty path.
    let err = Cli::try_parse_from(["proposal", "--output", ""]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::EmptyValue);
}
