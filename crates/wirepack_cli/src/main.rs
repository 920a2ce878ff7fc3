mod args;
mod types;

use std::{fs, path::Path, process::ExitCode, time::Instant};

use anyhow::Context;
use ansi_term::Colour;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;
use wirepack::{
  chunk_base_name, normalize_options, path_for, BaseSerializer, Module, ModuleGraph, ModuleId,
  NormalizedSerializerOptions, SerializeArgs, SerializeOutput, Serializer, SerializerOptions,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GraphFile {
  #[serde(flatten)]
  graph: ModuleGraph,
  #[serde(default)]
  pre_modules: Vec<Module>,
}

struct OutputFile {
  filename: String,
  content: String,
  is_async: bool,
}

fn init_tracing(log_level: Option<&str>) {
  let filter = match log_level {
    Some(level) => EnvFilter::new(level),
    None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
  };
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> anyhow::Result<T> {
  let content =
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn resolve_options(
  input: &InputArgs,
  output: &OutputArgs,
  enhance: &EnhanceArgs,
) -> anyhow::Result<NormalizedSerializerOptions> {
  let file_options = match &input.options {
    Some(path) => read_json::<SerializerOptions>(path)?,
    None => SerializerOptions::default(),
  };
  let flag_options = SerializerOptions {
    platform: enhance.platform.clone().map(Into::into),
    dev: enhance.dev.then_some(true),
    minify: enhance.minify.then_some(true),
    output: output.output.clone().map(Into::into),
    server_root: input.server_root.clone(),
    base_url: output.base_url.clone(),
    ..Default::default()
  };
  Ok(normalize_options(file_options.merge(flag_options)))
}

fn collect_output_files(
  output: SerializeOutput,
  entry: &ModuleId,
  options: &NormalizedSerializerOptions,
) -> Vec<OutputFile> {
  match output {
    SerializeOutput::Bundle(content) => {
      let filename = format!("{}.js", chunk_base_name(&path_for(entry, options)));
      vec![OutputFile { filename, content, is_async: false }]
    }
    SerializeOutput::Split(bundle) => bundle
      .artifacts
      .into_iter()
      .chain(bundle.assets)
      .map(|artifact| OutputFile {
        filename: artifact.filename,
        content: artifact.source,
        is_async: artifact.metadata.is_async,
      })
      .collect(),
  }
}

fn write_output_files(dir: &Path, files: &[OutputFile]) -> anyhow::Result<()> {
  for file in files {
    let path = dir.join(&file.filename);
    if let Some(parent) = path.parent() {
      fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, &file.content).with_context(|| format!("failed to write {}", path.display()))?;
  }
  Ok(())
}

fn print_output_files(files: &[OutputFile]) {
  let mut left = 0;
  let mut right = 0;

  let mut rows = Vec::with_capacity(files.len());

  for file in files {
    let size = format!("{:.2}", file.content.len() as f64 / 1024.0);
    right = right.max(size.len());
    left = left.max(file.filename.len());
    rows.push((file.filename.as_str(), size, file.is_async));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, size, is_async) in rows {
    let kind = if is_async { "async" } else { "chunk" };

    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint("<DIR>/"),
      color.paint(filename),
      "",
      dim.paint(kind),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename.len(),
      right = right - size.len()
    );
  }
}

async fn run(args: Commands) -> anyhow::Result<()> {
  let Commands { input, output, enhance } = args;
  let options = resolve_options(&input, &output, &enhance)?;
  let GraphFile { graph, pre_modules } = read_json::<GraphFile>(&input.graph)?;
  tracing::debug!(modules = graph.len(), pre_modules = pre_modules.len(), "loaded module graph");

  let mut serialize_args = SerializeArgs::new(&graph, &options).with_pre_modules(&pre_modules);
  if let Some(entry) = &input.entry {
    serialize_args = serialize_args.with_entry_file(entry);
  }
  let entry = ModuleId::from(serialize_args.entry_file);

  let start = Instant::now();
  let serialized = BaseSerializer::new().serialize(serialize_args).await?;

  let files = collect_output_files(serialized, &entry, &options);
  if let Some(dir) = &output.dir {
    write_output_files(dir, &files)?;
  }
  if !enhance.silent {
    print_output_files(&files);
  }

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  println!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));
  Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
  let args = Commands::parse();
  init_tracing(args.enhance.log_level.as_deref());

  match run(args).await {
    Ok(()) => ExitCode::SUCCESS,
    Err(error) => {
      eprintln!("{} {error:#}", Colour::Red.paint("Error:"));
      ExitCode::FAILURE
    }
  }
}
