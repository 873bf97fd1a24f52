use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use dialoguer::Confirm;
use log::{debug, info, warn};
use walkdir::WalkDir;

use crate::archive;
use crate::classifier::{classify_docs, classify_patches, BuildMethod, ClassifierConfig, PackageIdentity};
use crate::generator::ScriptGenerator;
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "mkplamobuild")]
#[command(version, about = "PlamoBuild script generator for Plamo Linux packages", long_about = None)]
pub struct Args {
    /// Source directory or source archive (.tar, .tar.gz, .tgz, .tar.bz2)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Install prefix substituted into the generated script
    #[arg(short, long, default_value = "/usr")]
    pub prefix: String,

    /// Source code download url recorded in the script header
    #[arg(short, long, default_value = "input sourcecode url here")]
    pub url: String,

    /// Force the build method instead of detecting it (configure, cmake, python, perl)
    #[arg(short, long, value_name = "METHOD", value_parser = parse_build_method)]
    pub method: Option<BuildMethod>,

    /// Copy sources into the build directory (configure builds only)
    #[arg(short, long)]
    pub source: bool,

    /// TOML file overriding the classifier keyword lists
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Verbose output (also prints the generated script)
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (suppress output)
    #[arg(short, long)]
    pub quiet: bool,
}

fn parse_build_method(s: &str) -> Result<BuildMethod, String> {
    s.parse()
}

pub fn run(args: Args) -> Result<()> {
    let classifier_config = match &args.config {
        Some(path) => Settings::load(path)?.classifier_config(),
        None => ClassifierConfig::default(),
    };

    let work_dir = std::env::current_dir().context("failed to determine working directory")?;

    let input_name = args
        .input
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("invalid input path {}", args.input.display()))?;

    // An archive is unpacked next to the script-to-be; a directory is used
    // in place. Either way the last path component names the package.
    let (src_path, dir_name) = if args.input.is_file() && archive::is_archive(input_name) {
        let dir_name = archive::source_dir_name(input_name)?;
        if !args.quiet {
            println!("Unpacking {}...", input_name);
        }
        archive::extract(&args.input, &work_dir)?;
        (work_dir.join(&dir_name), dir_name)
    } else if args.input.is_dir() {
        (args.input.clone(), input_name.to_string())
    } else {
        bail!(
            "{} is neither a source directory nor a supported archive",
            args.input.display()
        );
    };

    let identity = PackageIdentity::parse(&dir_name)?;
    debug!("package {} version {}", identity.basename, identity.version);

    let src_files = list_dir(&src_path)?;
    // Patches sit next to the build script, not inside the source tree.
    let work_files = list_dir(&work_dir)?;

    let method = match args.method {
        Some(method) => method,
        None => detect_method_or_default(&src_files),
    };
    info!("build method: {}", method);

    let docs = classify_docs(&classifier_config, &src_files);
    let patches = classify_patches(&classifier_config, &work_files);
    debug!("documentation files: {:?}", docs);
    debug!("patch files: {:?}", patches);

    let generator = ScriptGenerator::new(
        identity,
        method,
        dir_name,
        args.url.clone(),
        args.prefix.clone(),
        args.source,
        docs,
        patches,
    );
    let script = generator.generate();

    if args.verbose {
        println!("{}", script);
    }

    let script_path = work_dir.join(generator.script_name());
    if script_path.exists() {
        let overwrite = Confirm::new()
            .with_prompt(format!(
                "{} already exists. Overwrite?",
                generator.script_name()
            ))
            .default(false)
            .interact()?;
        if !overwrite {
            bail!("not overwriting {}", script_path.display());
        }
    }

    let written = generator.write_to_disk(&work_dir, &script)?;
    if !args.quiet {
        println!("✓ Generated {}", written.display());
    }

    Ok(())
}

fn detect_method_or_default(filenames: &[String]) -> BuildMethod {
    match BuildMethod::detect(filenames) {
        Some(method) => method,
        None => {
            warn!("cannot find a proper configure method");
            warn!("the script is set up for configure, adjust the build script manually");
            BuildMethod::Configure
        }
    }
}

/// Immediate children of `dir`, as bare file names.
fn list_dir(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}
