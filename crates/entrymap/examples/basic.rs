use entrymap::{
  InputOptions, ManifestGenerator, ManifestOptions, Output, OutputChunk, OutputOptions,
};

fn main() {
  let out_dir = std::env::temp_dir().join("entrymap-basic");

  let mut generator = ManifestGenerator::new(ManifestOptions {
    out_file: Some(out_dir.join("entrypoints.json").to_string_lossy().into_owned()),
    integrity_hash: Some(true),
    ..Default::default()
  })
  .expect("valid manifest options");

  generator.on_build_start(&InputOptions { input: vec!["src/app.ts".into()] });

  let bundle = [Output::Chunk(Box::new(OutputChunk {
    name: "app".into(),
    filename: "app.js".into(),
    resolved_filename: out_dir.join("dist/app.js"),
    code: "console.log(1)".to_string(),
    is_entry: true,
  }))];

  let _ = generator.on_write_bundle(&OutputOptions::default(), &bundle);
}
