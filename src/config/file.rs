// src/config/file.rs
// `key = value` config file. Blank lines and `#` comments are ignored.
//
//   curve_url = https://...
//   curve_out = dinos.json
//   wiki_url  =
//   workers   = 4

use std::{fs, path::Path, path::PathBuf, time::Duration};

use super::options::{ScrapeOptions, Source};
use crate::error::ConfigError;

/// Load options from `path`, starting from the defaults.
pub fn load(path: &Path) -> Result<ScrapeOptions, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut opts = ScrapeOptions::default();
    apply(&mut opts, &text)?;
    Ok(opts)
}

/// Load `path` if it exists, otherwise return the defaults.
pub fn load_or_default(path: &Path) -> Result<ScrapeOptions, ConfigError> {
    if path.exists() { load(path) } else { Ok(ScrapeOptions::default()) }
}

/// Apply every `key = value` line in `text` on top of `opts`.
pub fn apply(opts: &mut ScrapeOptions, text: &str) -> Result<(), ConfigError> {
    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') { continue; }

        let eq = line.find('=').ok_or(ConfigError::Syntax { line: line_no })?;
        let key = line[..eq].trim();
        let val = line[eq + 1..].trim();

        let bad = || ConfigError::BadValue { line: line_no, key: s!(key), value: s!(val) };

        match key {
            "curve_url" => opts.source_mut(Source::Curve).url = s!(val),
            "curve_out" => opts.source_mut(Source::Curve).out_path = non_empty_path(val).ok_or_else(bad)?,
            "wiki_url"  => opts.source_mut(Source::Wiki).url = s!(val),
            "wiki_out"  => opts.source_mut(Source::Wiki).out_path = non_empty_path(val).ok_or_else(bad)?,
            "workers" => {
                let n: usize = val.parse().map_err(|_| bad())?;
                if n == 0 { return Err(bad()); }
                opts.workers = n;
            }
            "timeout_secs" => opts.timeout = Duration::from_secs(val.parse().map_err(|_| bad())?),
            "pause_ms"     => opts.request_pause = Duration::from_millis(val.parse().map_err(|_| bad())?),
            "log_file"     => opts.log_file = non_empty_path(val).ok_or_else(bad)?,
            _ => return Err(ConfigError::UnknownKey { line: line_no, key: s!(key) }),
        }
    }
    Ok(())
}

fn non_empty_path(val: &str) -> Option<PathBuf> {
    if val.is_empty() { None } else { Some(PathBuf::from(val)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_defaults_and_skips_comments() {
        let mut opts = ScrapeOptions::default();
        let text = "
            # sources
            wiki_url = https://wiki.example/stats
            wiki_out = out/wiki.json
            workers = 8
            pause_ms = 0
        ";
        apply(&mut opts, text).unwrap();
        assert_eq!(opts.wiki.url, "https://wiki.example/stats");
        assert_eq!(opts.wiki.out_path, PathBuf::from("out/wiki.json"));
        assert_eq!(opts.workers, 8);
        assert_eq!(opts.request_pause, Duration::ZERO);
        assert!(opts.wiki.is_enabled());
        // untouched
        assert_eq!(opts.curve, ScrapeOptions::default().curve);
    }

    #[test]
    fn empty_url_disables_source() {
        let mut opts = ScrapeOptions::default();
        apply(&mut opts, "curve_url =").unwrap();
        assert!(!opts.curve.is_enabled());
    }

    #[test]
    fn rejects_bad_numbers_and_unknown_keys() {
        let mut opts = ScrapeOptions::default();
        let err = apply(&mut opts, "workers = lots").unwrap_err();
        assert!(matches!(err, ConfigError::BadValue { line: 1, .. }));

        let err = apply(&mut opts, "\nworkers = 0").unwrap_err();
        assert!(matches!(err, ConfigError::BadValue { line: 2, .. }));

        let err = apply(&mut opts, "colour = blue").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKey { .. }));

        let err = apply(&mut opts, "just words").unwrap_err();
        assert!(matches!(err, ConfigError::Syntax { line: 1 }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let p = std::env::temp_dir().join("dino_stats_no_such_config.conf");
        let _ = fs::remove_file(&p);
        assert_eq!(load_or_default(&p).unwrap(), ScrapeOptions::default());
        assert!(matches!(load(&p), Err(ConfigError::Io { .. })));
    }
}
