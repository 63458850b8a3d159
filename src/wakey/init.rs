use crate::api::WakeyApi;
use crate::config::WakeyConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use crate::web::templates::page_renderer;
use crate::web::AppState;

pub struct WakeyContext {
    pub api: WakeyApi<FileStore>,
    pub config: WakeyConfig,
}

/// Open the file store described by `config`, creating its directory if needed.
pub fn initialize(config: WakeyConfig) -> Result<WakeyContext> {
    let store = FileStore::new(&config.data_dir).with_file_ext(config.get_file_ext());
    store.ensure_root()?;
    log::debug!(
        "Using entries in {} (*{})",
        store.root().display(),
        store.file_ext()
    );

    Ok(WakeyContext {
        api: WakeyApi::new(store),
        config,
    })
}

/// Turn a context into the state the HTTP layer shares between requests.
pub fn app_state(ctx: WakeyContext) -> Result<AppState<FileStore>> {
    let pages = page_renderer(ctx.config.templates_dir.as_deref())?;
    Ok(AppState::new(ctx.api, pages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_data_dir() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("entries");
        let config = WakeyConfig {
            data_dir: data_dir.clone(),
            ..WakeyConfig::default()
        };

        let ctx = initialize(config).unwrap();
        assert!(data_dir.is_dir());
        assert_eq!(ctx.api.store().root(), data_dir.as_path());
    }

    #[test]
    fn test_initialize_applies_file_ext() {
        let temp = TempDir::new().unwrap();
        let mut config = WakeyConfig {
            data_dir: temp.path().to_path_buf(),
            ..WakeyConfig::default()
        };
        config.set_file_ext("txt");

        let ctx = initialize(config).unwrap();
        ctx.api.write_entry("note", "x").unwrap();
        assert!(temp.path().join("note.txt").is_file());
    }

    #[test]
    fn test_app_state_renders_builtin_pages() {
        let temp = TempDir::new().unwrap();
        let config = WakeyConfig {
            data_dir: temp.path().to_path_buf(),
            ..WakeyConfig::default()
        };

        let state = app_state(initialize(config).unwrap()).unwrap();
        let form = state
            .pages
            .render(crate::web::templates::FORM_TEMPLATE_NAME, &())
            .unwrap();
        assert!(form.contains("/web/create"));
    }
}
