//! Command line argument parsing and validation.
//!
//! Every packaging parameter can come from a flag or from a `PACKR_*`
//! environment variable, so build scripts can configure a run without
//! assembling a command line.

use crate::bundler::{EmptyClasspathPolicy, Platform, RawInput};
use clap::{ArgAction, Parser, builder::BoolishValueParser};
use std::{path::PathBuf, time::Duration};

/// Packaging helper for JVM applications built with packr
#[derive(Parser, Debug)]
#[command(
    name = "packr_bundle",
    version,
    about = "Validates packr packaging parameters and runs packr",
    long_about = "Resolves packaging parameters from a JSON configuration document or from \
discrete flags, checks them, and hands them to packr.

If --json-config points to an existing document, it takes precedence over every other \
packaging flag. Otherwise the discrete flags are used.

Usage:
  packr_bundle --json-config packr.json
  packr_bundle --platform linux64 --jdk openjdk-17.zip --executable myapp \\
      --classpath target/myapp.jar --main-class com.example.Main --out-dir out-linux

Exit codes: 0 success, 2 unreadable JSON configuration, 3 invalid JDK path, \
4 invalid main class, 5 empty classpath, 6 packr failure, 1 anything else."
)]
pub struct Args {
    /// JSON configuration document; takes precedence over the other packaging flags
    #[arg(long, value_name = "PATH", env = "PACKR_JSON_CONFIG")]
    pub json_config: Option<PathBuf>,

    /// Target platform: Windows32, Windows64, Linux32, Linux64, MacOS
    #[arg(long, value_name = "PLATFORM", env = "PACKR_PLATFORM")]
    pub platform: Option<Platform>,

    /// ZIP archive of a JDK build containing a JRE
    #[arg(long, value_name = "PATH", env = "PACKR_JDK")]
    pub jdk: Option<String>,

    /// Name of the native executable, without extension such as ".exe"
    #[arg(long, value_name = "NAME", env = "PACKR_EXECUTABLE")]
    pub executable: Option<String>,

    /// JAR file to put on the classpath (repeatable, comma-separated)
    #[arg(
        long,
        value_name = "PATH",
        env = "PACKR_CLASSPATH",
        value_delimiter = ','
    )]
    pub classpath: Vec<String>,

    /// Fully qualified main class, using dots to delimit package names
    #[arg(long, value_name = "CLASS", env = "PACKR_MAIN_CLASS")]
    pub main_class: Option<String>,

    /// JVM argument without leading dashes, e.g. "Xmx1G" (repeatable, comma-separated)
    #[arg(
        long = "vm-arg",
        value_name = "ARG",
        env = "PACKR_VM_ARGS",
        value_delimiter = ',',
        allow_hyphen_values = true
    )]
    pub vm_args: Vec<String>,

    /// JRE minimization profile: "soft", "hard", or a path to a minimization config
    #[arg(long, value_name = "POLICY", env = "PACKR_MINIMIZE_JRE")]
    pub minimize_jre: Option<String>,

    /// File or directory packaged next to the executable (repeatable, comma-separated)
    #[arg(
        long = "resource",
        value_name = "PATH",
        env = "PACKR_RESOURCES",
        value_delimiter = ','
    )]
    pub resources: Vec<PathBuf>,

    /// Output directory
    #[arg(long, value_name = "PATH", env = "PACKR_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// App bundle icon (.icns), MacOS only
    #[arg(long, value_name = "PATH", env = "PACKR_ICON_RESOURCE")]
    pub icon_resource: Option<PathBuf>,

    /// Bundle identifier, e.g. "com.my.app", MacOS only
    #[arg(long, value_name = "ID", env = "PACKR_BUNDLE_IDENTIFIER")]
    pub bundle_identifier: Option<String>,

    /// Print more status information during processing
    #[arg(
        long,
        value_name = "BOOL",
        env = "PACKR_VERBOSE",
        default_value_t = true,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    pub verbose: bool,

    /// Fail when no classpath entry exists instead of passing an empty classpath to packr
    #[arg(long)]
    pub reject_empty_classpath: bool,

    /// Resolve and validate only; do not run packr
    #[arg(long)]
    pub validate_only: bool,

    /// packr launcher executable (default: "packr" from PATH)
    #[arg(
        long = "packr",
        value_name = "PATH",
        env = "PACKR_ENGINE",
        conflicts_with = "packr_jar"
    )]
    pub packr: Option<PathBuf>,

    /// packr jar, run with "java -jar"
    #[arg(long, value_name = "PATH", env = "PACKR_JAR")]
    pub packr_jar: Option<PathBuf>,

    /// Java executable used with --packr-jar (default: "java" from PATH)
    #[arg(long, value_name = "PATH", env = "PACKR_JAVA", requires = "packr_jar")]
    pub java: Option<PathBuf>,

    /// Kill packr after this many seconds
    #[arg(long, value_name = "SECS")]
    pub engine_timeout: Option<u64>,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.engine_timeout == Some(0) {
            return Err("Engine timeout must be at least 1 second".to_string());
        }

        Ok(())
    }

    /// Empty classpath policy selected by the flags.
    pub fn empty_classpath_policy(&self) -> EmptyClasspathPolicy {
        if self.reject_empty_classpath {
            EmptyClasspathPolicy::Reject
        } else {
            EmptyClasspathPolicy::Accept
        }
    }

    /// Engine timeout, if any.
    pub fn engine_timeout(&self) -> Option<Duration> {
        self.engine_timeout.map(Duration::from_secs)
    }
}

impl From<&Args> for RawInput {
    fn from(args: &Args) -> Self {
        Self {
            structured_config_path: args.json_config.clone(),
            platform: args.platform,
            jdk_archive_path: args.jdk.clone().unwrap_or_default(),
            executable_name: args.executable.clone().unwrap_or_default(),
            classpath_entries: args.classpath.clone(),
            main_class: args.main_class.clone().unwrap_or_default(),
            vm_args: args.vm_args.clone(),
            jre_minimize_policy: args.minimize_jre.clone(),
            resources: args.resources.clone(),
            output_dir: args.out_dir.clone(),
            icon_resource: args.icon_resource.clone(),
            bundle_identifier: args.bundle_identifier.clone(),
            verbose: args.verbose,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        let output = super::OutputManager::new(args.verbose, args.quiet);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
