//! Backend configuration, loaded from a TOML file.

use anyhow::Context as _;
use camino::Utf8Path;
use ksyslog::sink::{LowLevelConsoleSink, NullSink, RawDescriptorSink, Sink, StructuredSink};
use ksyslog::{Dispatcher, Level, Levels, SeverityMask};
use ksyslog_osal_std::console::{Console, Fd};
use ksyslog_osal_std::context::Context;
use ksyslog_osal_std::log::{Log, LogChannel};
use ksyslog_osal_std::time::Time;
use serde::Deserialize;

static STRUCTURED: StructuredSink<Log> = StructuredSink::new();
static CONSOLE: LowLevelConsoleSink<Console> = LowLevelConsoleSink::new();

/// The output backend every message goes to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Backend {
    /// The buffered logging channel, standard output on hosted targets.
    #[default]
    Structured,
    /// A numbered file descriptor; task context only.
    RawDescriptor,
    /// One character at a time on the low-level console, standard error on hosted targets.
    LowLevelConsole,
    /// Discard everything.
    None,
}

/// Dispatcher configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub backend: Backend,
    /// Descriptor written by the `raw-descriptor` backend.
    pub descriptor: i32,
    /// Route interrupt-context messages to the low-level console when the backend is task-only.
    pub fallback_console: bool,
    pub timestamps: bool,
    /// Enabled level names; every level when absent.
    pub levels: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            descriptor: 1,
            fallback_console: false,
            timestamps: false,
            levels: None,
        }
    }
}

impl Config {
    /// Reads the configuration from the TOML file at `path`.
    pub fn load(path: &Utf8Path) -> anyhow::Result<Self> {
        let text = fs_err::read_to_string(path)?;
        Self::parse(&text).with_context(|| format!("invalid configuration in {path}"))
    }

    /// Parses the configuration from TOML text.
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the levels the severity mask starts with.
    pub fn mask(&self) -> anyhow::Result<Levels> {
        let Some(names) = &self.levels else {
            return Ok(Levels::all());
        };

        names
            .iter()
            .map(|name| {
                name.parse::<Level>()
                    .with_context(|| format!("invalid level {name:?}"))
            })
            .collect()
    }

    /// Returns the sink for the configured backend.
    fn sink(&self) -> &'static dyn Sink {
        match self.backend {
            Backend::Structured => {
                Log::init();
                &STRUCTURED
            }
            Backend::RawDescriptor => {
                Box::leak(Box::new(RawDescriptorSink::<Fd>::new(self.descriptor)))
            }
            Backend::LowLevelConsole => &CONSOLE,
            Backend::None => &NullSink,
        }
    }

    /// Returns the low-level console serving interrupt context, if configured.
    fn fallback(&self) -> Option<&'static LowLevelConsoleSink<Console>> {
        self.fallback_console.then_some(&CONSOLE)
    }

    /// Binds the configured backend into a dispatcher filtering with `mask`.
    pub fn dispatcher(&self, mask: &'static SeverityMask) -> Dispatcher<'static> {
        let builder = ksyslog::dispatch::build()
            .mask(mask)
            .sink(self.sink())
            .context::<Context>();
        let builder = match self.fallback() {
            Some(console) => builder.fallback(console),
            None => builder,
        };
        let builder = if self.timestamps {
            builder.timestamps::<Time>()
        } else {
            builder
        };
        builder.finish()
    }

    /// Installs the dispatcher as the global one, bound to the global mask, then applies the configured levels.
    ///
    /// Can only succeed once per process.
    pub fn install(&self) -> anyhow::Result<()> {
        let mask = self.mask()?;

        ksyslog::set_dispatcher(self.dispatcher(&ksyslog::MASK))
            .context("failed to install the dispatcher")?;

        ksyslog::set_mask(mask);
        tracing::debug!(config = ?self, ?mask, "dispatcher installed");

        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::{Read, Seek, Write};
    use std::os::fd::AsRawFd;

    use camino::Utf8Path;
    use indoc::indoc;
    use ksyslog::sink::Reach;
    use ksyslog::{Level, Levels, Outcome, SeverityMask};
    use ksyslog_osal_std::context::Context;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::{Backend, Config};

    static ALL: SeverityMask = SeverityMask::all();

    fn read_back(file: &mut std::fs::File) -> String {
        let mut contents = String::new();
        file.rewind().unwrap();
        file.read_to_string(&mut contents).unwrap();
        contents
    }

    #[test]
    fn empty_file_is_the_default() {
        let config = Config::parse("").unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.backend, Backend::Structured);
        assert_eq!(config.descriptor, 1);
        assert_eq!(config.mask().unwrap(), Levels::all());
    }

    #[test]
    fn full_file() {
        let config = Config::parse(indoc! {r#"
            backend = "raw-descriptor"
            descriptor = 2
            fallback_console = true
            timestamps = true
            levels = ["emerg", "alert", "crit", "error"]
        "#})
        .unwrap();

        assert_eq!(
            config,
            Config {
                backend: Backend::RawDescriptor,
                descriptor: 2,
                fallback_console: true,
                timestamps: true,
                levels: Some(
                    ["emerg", "alert", "crit", "error"]
                        .map(String::from)
                        .to_vec()
                ),
            }
        );
        assert_eq!(config.mask().unwrap(), Levels::upto(Level::Err));
    }

    #[test_case("structured", Backend::Structured)]
    #[test_case("raw-descriptor", Backend::RawDescriptor)]
    #[test_case("low-level-console", Backend::LowLevelConsole)]
    #[test_case("none", Backend::None)]
    fn backend_names(name: &str, expected: Backend) {
        let config = Config::parse(&format!("backend = {name:?}")).unwrap();

        assert_eq!(config.backend, expected);
    }

    #[test_case(Backend::Structured, Reach::Anywhere)]
    #[test_case(Backend::RawDescriptor, Reach::TaskOnly)]
    #[test_case(Backend::LowLevelConsole, Reach::Anywhere)]
    #[test_case(Backend::None, Reach::Nowhere)]
    fn backend_binds_its_sink(backend: Backend, reach: Reach) {
        let config = Config {
            backend,
            ..Config::default()
        };

        assert_eq!(config.sink().reach(), reach);
    }

    #[test]
    fn fallback_console_is_opt_in() {
        let mut config = Config::default();
        assert!(config.fallback().is_none());

        config.fallback_console = true;
        let console: &dyn ksyslog::sink::Sink = config.fallback().unwrap();
        assert_eq!(console.reach(), Reach::Anywhere);
    }

    #[test]
    fn raw_descriptor_writes_in_task_context() {
        let mut file = tempfile::tempfile().unwrap();
        let config = Config {
            backend: Backend::RawDescriptor,
            descriptor: file.as_raw_fd(),
            ..Config::default()
        };

        let dispatcher = config.dispatcher(&ALL);

        assert_eq!(
            dispatcher.logv(Level::Info, format_args!("hi\n")),
            Ok(Outcome::Delivered(3))
        );
        assert_eq!(read_back(&mut file), "hi\n");
    }

    #[test]
    fn raw_descriptor_without_fallback_drops_in_interrupt_context() {
        let mut file = tempfile::tempfile().unwrap();
        let config = Config {
            backend: Backend::RawDescriptor,
            descriptor: file.as_raw_fd(),
            timestamps: true,
            ..Config::default()
        };

        let dispatcher = config.dispatcher(&ALL);
        let result = Context::interrupt(|| dispatcher.logv(Level::Emerg, format_args!("hi\n")));

        assert_eq!(result, Ok(Outcome::Dropped));
        assert_eq!(read_back(&mut file), "");
    }

    #[test]
    fn raw_descriptor_with_fallback_leaves_the_descriptor_alone() {
        let mut file = tempfile::tempfile().unwrap();
        let config = Config {
            backend: Backend::RawDescriptor,
            descriptor: file.as_raw_fd(),
            fallback_console: true,
            ..Config::default()
        };

        let dispatcher = config.dispatcher(&ALL);
        let result = Context::interrupt(|| dispatcher.logv(Level::Err, format_args!("hi\n")));

        assert_eq!(result, Ok(Outcome::Delivered(3)));
        assert_eq!(read_back(&mut file), "");
    }

    #[test]
    fn timestamps_prefix_the_descriptor_output() {
        let mut file = tempfile::tempfile().unwrap();
        let config = Config {
            backend: Backend::RawDescriptor,
            descriptor: file.as_raw_fd(),
            timestamps: true,
            ..Config::default()
        };

        config
            .dispatcher(&ALL)
            .logv(Level::Info, format_args!("hi"))
            .unwrap();

        let contents = read_back(&mut file);
        assert_eq!(contents.len(), ksyslog::Timestamp::ZERO.to_string().len() + 2);
        assert!(contents.starts_with('['), "{contents:?}");
        assert!(contents.ends_with("]hi"), "{contents:?}");
    }

    #[test]
    fn none_discards() {
        let config = Config {
            backend: Backend::None,
            ..Config::default()
        };

        assert_eq!(
            config.dispatcher(&ALL).logv(Level::Emerg, format_args!("gone")),
            Ok(Outcome::Discarded)
        );
    }

    #[test]
    fn unknown_backend_is_rejected() {
        assert!(Config::parse(r#"backend = "ramlog""#).is_err());
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(Config::parse("timestamp = true").is_err());
    }

    #[test]
    fn unknown_level_is_rejected() {
        let config = Config::parse(r#"levels = ["err", "loud"]"#).unwrap();

        let error = config.mask().unwrap_err();

        assert_eq!(error.to_string(), r#"invalid level "loud""#);
    }

    #[test]
    fn empty_level_list_disables_everything() {
        let config = Config::parse("levels = []").unwrap();

        assert_eq!(config.mask().unwrap(), Levels::empty());
    }

    #[test]
    fn load_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"backend = 3\n").unwrap();
        let path = Utf8Path::from_path(file.path()).unwrap();

        let error = Config::load(path).unwrap_err();

        assert_eq!(error.to_string(), format!("invalid configuration in {path}"));
    }

    #[test]
    fn load_missing_file_fails() {
        let directory = tempfile::tempdir().unwrap();
        let path = Utf8Path::from_path(directory.path()).unwrap().join("ksyslog.toml");

        assert!(Config::load(&path).is_err());
    }
}
