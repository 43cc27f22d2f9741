// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use console::style;
use std::path::Path;

use crate::analysis::{ChangeAnalyzer, ChangeCategory};
use crate::config::{default::example_config, DocsConfig};
use crate::docs::{format_requirement_number, DocumentStore};
use crate::error::{DocsError, DocumentError, Result, ResultExt};
use crate::git::GitCli;
use crate::render::{category_header, fields, render_template, ApiDisposition, DocTemplate};

use super::args::{AnalyzeArgs, Cli, Commands, UpdateAction};

/// Name of the configuration file written by `update init --write-config`.
const CONFIG_FILE_NAME: &str = "docsync.toml";

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let config = if let Some(config_path) = &cli.config {
        DocsConfig::load_from(config_path)?
    } else {
        DocsConfig::load()?
    };

    if !config.ui.color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    match cli.command {
        Commands::Analyze(args) => run_analyze(&config, args),
        Commands::Update(args) => {
            let root = std::env::current_dir().context("Failed to get current directory")?;
            let store = DocumentStore::new(root, config.paths.clone());
            run_update(&config, &store, args.action)
        }
        Commands::Version => run_version(),
    }
}

/// Today's date as used in generated documents.
fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Run the analyze command.
fn run_analyze(config: &DocsConfig, args: AnalyzeArgs) -> Result<()> {
    tracing::debug!("Running analyze command with args: {:?}", args);

    let analyzer = ChangeAnalyzer::new(config.clone())?;
    let source = GitCli::current()?;

    eprintln!("Analyzing git changes...");
    let report = analyzer.analyze(&source, args.since.as_deref(), &today());

    if report.is_empty() {
        println!("No file changes detected");
        return Ok(());
    }

    let output = if args.json {
        report.to_json()?
    } else {
        report.to_text()
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, output).map_err(|e| {
                DocsError::Document(DocumentError::WriteFailed {
                    path: path.clone(),
                    message: e.to_string(),
                })
            })?;
            println!(
                "{} Analysis saved to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Run one of the update actions.
fn run_update(config: &DocsConfig, store: &DocumentStore, action: UpdateAction) -> Result<()> {
    match action {
        UpdateAction::Init { write_config } => run_init(config, store, write_config),
        UpdateAction::Changelog { kind, message } => {
            run_changelog(store, kind.into(), &message)
        }
        UpdateAction::Api {
            kind,
            endpoint,
            description,
        } => run_api(store, kind.into(), &endpoint, &description),
        UpdateAction::Req {
            name,
            title,
            author,
            force,
        } => run_req(config, store, &name, title, author, force),
    }
}

/// Create the documentation layout.
fn run_init(config: &DocsConfig, store: &DocumentStore, write_config: bool) -> Result<()> {
    eprintln!("Initializing documentation layout...");
    store.ensure_layout()?;

    let date = today();
    let documents = [
        (
            store.changelog_path(),
            DocTemplate::Changelog,
            fields([("repo_url", config.project.repo_url.as_str())]),
        ),
        (
            store.api_changelog_path(),
            DocTemplate::ApiChangelog,
            fields(Vec::<(String, String)>::new()),
        ),
        (
            store.api_doc_path(),
            DocTemplate::ApiDoc,
            fields([
                ("project_name", config.project.name.as_str()),
                ("date", date.as_str()),
                ("base_url", config.project.base_url.as_str()),
                ("description", "[待填写：项目 API 简介]"),
                ("auth_type", "Bearer Token"),
                ("endpoints", "[待填写：按模块列出接口]"),
                ("models", "[待填写：主要数据结构]"),
            ]),
        ),
    ];

    for (path, template, values) in documents {
        if path.exists() {
            println!("{} Skipped (exists): {}", style("-").dim(), path.display());
            continue;
        }
        let text = render_template(template, &values)?;
        store.write_document(&path, &text)?;
        println!("{} Created {}", style("✓").green(), path.display());
    }

    if write_config {
        let config_path = Path::new(CONFIG_FILE_NAME);
        if config_path.exists() {
            println!(
                "{} Skipped (exists): {}",
                style("-").dim(),
                config_path.display()
            );
        } else {
            store.write_document(&store.resolve(config_path), example_config())?;
            println!("{} Created {}", style("✓").green(), CONFIG_FILE_NAME);
        }
    }

    println!("{} Documentation layout ready", style("✓").green());
    println!();
    println!("{}", layout_tree(config));
    Ok(())
}

/// Tree view of the documentation layout.
fn layout_tree(config: &DocsConfig) -> String {
    let docs = config.paths.docs_dir.display();
    let api = relative_name(&config.paths.api_docs_dir, &config.paths.docs_dir);
    let req = relative_name(&config.paths.requirements_dir, &config.paths.docs_dir);

    format!(
        "{docs}/\n\
         ├── CHANGELOG.md\n\
         ├── {api}/\n\
         │   ├── API.md\n\
         │   └── API_CHANGELOG.md\n\
         └── {req}/\n    \
             └── REQ-<feature>.md",
        docs = docs,
        api = api,
        req = req
    )
}

fn relative_name(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Upsert a bullet, downgrading a missing section to a warning.
fn upsert_or_warn(store: &DocumentStore, path: &Path, header: &str, entry: &str) -> Result<bool> {
    match store.update_section(path, header, entry) {
        Ok(()) => Ok(true),
        Err(DocsError::Document(e @ DocumentError::SectionNotFound { .. })) => {
            eprintln!("{} {}", style("warning:").yellow().bold(), e);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Run the changelog update.
fn run_changelog(store: &DocumentStore, category: ChangeCategory, message: &str) -> Result<()> {
    let path = store.changelog_path();
    if upsert_or_warn(store, &path, &category_header(category), message)? {
        println!(
            "{} Updated CHANGELOG: [{}] {}",
            style("✓").green(),
            category,
            message
        );
    }
    Ok(())
}

/// Run the API changelog update.
fn run_api(
    store: &DocumentStore,
    disposition: ApiDisposition,
    endpoint: &str,
    description: &str,
) -> Result<()> {
    let path = store.api_changelog_path();
    let entry = format!("`{}` - {}", endpoint, description);
    if upsert_or_warn(store, &path, &disposition.header(), &entry)? {
        println!(
            "{} Updated API CHANGELOG: [{}] {}",
            style("✓").green(),
            disposition.title(),
            endpoint
        );
    }
    Ok(())
}

/// Turn a feature slug into a title: `user-auth` becomes `User Auth`.
fn title_from_slug(name: &str) -> String {
    name.split(|c: char| c == '-' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Create a requirement document.
fn run_req(
    config: &DocsConfig,
    store: &DocumentStore,
    name: &str,
    title: Option<String>,
    author: Option<String>,
    force: bool,
) -> Result<()> {
    let path = store.requirement_path(name);
    if path.exists() && !force {
        return Err(DocumentError::AlreadyExists { path }.into());
    }

    let title = title.unwrap_or_else(|| title_from_slug(name));
    let author = author
        .or_else(|| config.project.author.clone())
        .unwrap_or_else(|| "Unknown".to_string());
    let number = format_requirement_number(store.next_requirement_number());
    let date = today();

    tracing::debug!("Creating requirement REQ-{} for {}", number, name);

    let values = fields([
        ("title", title.as_str()),
        ("number", number.as_str()),
        ("date", date.as_str()),
        ("author", author.as_str()),
        ("brief_description", "[待填写：一句话描述该功能的核心目的]"),
        ("keywords", "[待填写：功能相关的关键术语]"),
        ("background", "[待填写：为什么需要这个功能？解决什么问题？]"),
        ("goal1", "[待填写：具体可衡量的目标]"),
        ("goal2", "[待填写：具体可衡量的目标]"),
        ("non_goals", "[待填写：明确声明此功能不做什么]"),
        ("role", "[角色]"),
        ("want", "[功能]"),
        ("value", "[价值]"),
        ("feature_name", "[功能名]"),
        ("feature_description", "[详细描述]"),
        ("business_rule", "[业务规则描述]"),
        ("performance", "[具体指标]"),
        ("throughput", "[具体指标]"),
        ("security", "[安全相关要求]"),
        ("compatibility", "[兼容性要求]"),
        ("ui_layout", "[描述或引用设计稿]"),
        ("interaction_flow", "[用户操作的步骤流程]"),
        ("state", "[状态名]"),
        ("display", "[效果]"),
        ("trigger", "[条件]"),
        ("data_tables", "[使用 Mermaid ER 图或表格描述]"),
        ("field", "[字段]"),
        ("type", "[类型]"),
        ("field_description", "[说明]"),
        ("acceptance_criteria", "[验收条件]"),
        ("test_case", "[测试步骤]"),
        ("expected_result", "[预期结果]"),
    ]);

    let text = render_template(DocTemplate::Requirement, &values)?;
    store.write_document(&path, &text)?;

    println!(
        "{} Created requirement document {}",
        style("✓").green(),
        path.display()
    );
    println!("  Document number: REQ-{}", number);
    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("docsync {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_slug() {
        assert_eq!(title_from_slug("user-auth"), "User Auth");
        assert_eq!(title_from_slug("API-keys"), "Api Keys");
        assert_eq!(title_from_slug("login"), "Login");
        assert_eq!(title_from_slug("a--b"), "A B");
    }

    #[test]
    fn test_layout_tree_default_paths() {
        let tree = layout_tree(&DocsConfig::default());
        assert!(tree.starts_with("docs/\n"));
        assert!(tree.contains("├── api/"));
        assert!(tree.contains("└── requirements/"));
        assert!(tree.ends_with("REQ-<feature>.md"));
    }
}
