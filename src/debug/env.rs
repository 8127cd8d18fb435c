pub(crate) mod svg {
    use std::{env, path};

    use crate::options::env_key;

    const GROUP_PREFIX: &str = "SVG";

    pub(crate) fn output_path() -> Option<path::PathBuf> {
        const KEY: &str = "OUTPUT_PATH";
        let key = env_key(&format!("{}_{}", GROUP_PREFIX, KEY));

        env::var_os(key).map(path::PathBuf::from)
    }

    pub(crate) fn show_labels() -> bool {
        // Note the show/hide inversion
        const KEY: &str = "HIDE_LABELS";
        let key = env_key(&format!("{}_{}", GROUP_PREFIX, KEY));

        env::var_os(key).is_none()
    }
}
