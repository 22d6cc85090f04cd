//! Toolbar playground: a markdown buffer driven by the toolbar.
//!
//! Set `WEAVER_TOOLBAR_CONFIG` to a `.toml` or `.json` file to override the
//! default layout.

use dioxus::prelude::*;
use weaver_toolbar::{Toolbar, use_editor_handle};
use weaver_toolbar_core::{BlockFormat, EditorCommands, MarkdownEditor, MarkFormat, ToolbarConfig};

const SAMPLE: &str = "Toolbar playground\n\nSelect a word and make it bold.";
const INPUT_ID: &str = "toolbar-demo-input";

fn main() -> miette::Result<()> {
    init_tracing();

    let config = match std::env::var_os("WEAVER_TOOLBAR_CONFIG") {
        Some(path) => ToolbarConfig::load(path)?,
        None => ToolbarConfig::default(),
    };
    tracing::info!(items = config.items.len(), "starting toolbar demo");

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
    Ok(())
}

fn init_tracing() {
    // Must happen before dioxus::launch so dioxus skips its own init
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    {
        use tracing::Level;
        use tracing::subscriber::set_global_default;
        use tracing_subscriber::Registry;
        use tracing_subscriber::layer::SubscriberExt;

        console_error_panic_hook::set_once();

        let console_level = if cfg!(debug_assertions) {
            Level::DEBUG
        } else {
            Level::INFO
        };
        let wasm_layer = tracing_wasm::WASMLayer::new(
            tracing_wasm::WASMLayerConfigBuilder::new()
                .set_max_level(console_level)
                .build(),
        );
        let _ = set_global_default(Registry::default().with(wasm_layer));
    }

    #[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
    {
        use tracing_subscriber::EnvFilter;
        use tracing_subscriber::layer::SubscriberExt;
        use tracing_subscriber::util::SubscriberInitExt;

        let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init();
    }
}

#[component]
fn App() -> Element {
    let config = use_context::<ToolbarConfig>();
    let mut doc = use_signal(|| MarkdownEditor::new(SAMPLE));
    let editor = use_editor_handle(doc);

    let status = {
        let doc = doc.read();
        let marks: Vec<&str> = MarkFormat::ALL
            .into_iter()
            .filter(|mark| doc.is_mark_active(*mark))
            .map(MarkFormat::as_str)
            .collect();
        let in_table = doc.is_block_active(BlockFormat::Table);
        format!("caret {} | marks: {} | table: {in_table}", doc.caret(), marks.join(", "))
    };

    rsx! {
        div { class: "toolbar-demo",
            Toolbar { editor, config }
            textarea {
                id: INPUT_ID,
                rows: "12",
                cols: "80",
                value: "{doc.read().text()}",
                oninput: move |evt| {
                    doc.write().set_text(evt.value());
                    sync_selection(doc);
                },
                onselect: move |_| sync_selection(doc),
                onkeyup: move |_| sync_selection(doc),
                onmouseup: move |_| sync_selection(doc),
            }
            p { class: "toolbar-demo-status", "{status}" }
        }
    }
}

/// Copy the textarea's selection into the document.
fn sync_selection(mut doc: Signal<MarkdownEditor>) {
    let script = format!(
        "const el = document.getElementById({INPUT_ID:?});\n\
         return el ? [el.selectionStart, el.selectionEnd] : null;"
    );
    spawn(async move {
        match document::eval(&script).join::<Option<(usize, usize)>>().await {
            // DOM offsets are UTF-16 code units.
            Ok(Some((start, end))) => doc.write().set_selection_utf16(start, end),
            Ok(None) => {}
            Err(err) => tracing::warn!(error = ?err, "could not read editor selection"),
        }
    });
}
