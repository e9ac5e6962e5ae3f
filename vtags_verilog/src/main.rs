use anyhow::{bail, Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use vtags_basics::source::SourceManager;
use vtags_verilog::kind::kind_table;
use vtags_verilog::lang::Lang;
use vtags_verilog::scan::scan_chunk;
use vtags_verilog::tag::{ScanOptions, Tag, TagStore};

/// Tag extractor for Verilog and SystemVerilog sources.
#[derive(Parser)]
#[command(name = "vtags", version)]
struct Args {
    /// Input files; the language is chosen by extension
    /// (.v -> Verilog; .sv, .svh, .svi -> SystemVerilog).
    files: Vec<PathBuf>,
    /// Force the input language for all files (verilog, systemverilog).
    #[arg(long, value_parser = parse_lang)]
    language: Option<Lang>,
    /// Enable (+) or disable (-) tag kinds by letter, e.g. "+Q-b".
    #[arg(long)]
    kinds: Option<String>,
    /// Extras to enable, e.g. "+q" for fully qualified tags.
    #[arg(long)]
    extras: Option<String>,
    /// Extra fields to attach, e.g. "+parameter".
    #[arg(long)]
    fields: Option<String>,
    /// List the tag kinds of both languages and exit.
    #[arg(long)]
    list_kinds: bool,
}

fn parse_lang(s: &str) -> Result<Lang, String> {
    match s {
        "verilog" => Ok(Lang::Verilog),
        "systemverilog" => Ok(Lang::SystemVerilog),
        _ => Err(format!("unknown language `{}`", s)),
    }
}

fn list_kinds() {
    for lang in [Lang::Verilog, Lang::SystemVerilog] {
        println!("{}:", lang.name());
        for def in kind_table(lang) {
            println!(
                "    {}  {:<12} {}{}",
                def.letter,
                def.kind.tag_name().unwrap(),
                def.description,
                if def.enabled { "" } else { " [off]" },
            );
        }
    }
}

/// Applies a "+X-Y" letter string to the enabled-kind set.
fn apply_kinds(options: &mut ScanOptions, lang: Lang, letters: &str) -> Result<()> {
    let mut enable = true;
    for ch in letters.chars() {
        match ch {
            '+' => enable = true,
            '-' => enable = false,
            _ => {
                let def = kind_table(lang)
                    .iter()
                    .find(|def| def.letter == ch)
                    .with_context(|| format!("unknown kind letter `{}`", ch))?;
                if enable {
                    options.enabled.insert(def.kind);
                } else {
                    options.enabled.remove(def.kind);
                }
            }
        }
    }
    Ok(())
}

fn print_tag(file_name: &str, options: &ScanOptions, tag: &Tag) {
    print!("{}\t{}\t{};\"", tag.name, file_name, tag.line);
    if let Some(def) = kind_table(Lang::SystemVerilog)
        .iter()
        .find(|def| def.kind == tag.kind)
    {
        print!("\t{}", def.letter);
    }
    if let Some((kind, ref name)) = tag.scope {
        print!("\t{}:{}", kind.tag_name().unwrap_or("unknown"), name);
    }
    if let Some(ref base) = tag.inheritance {
        print!("\tinherits:{}", base);
    }
    if options.parameter_field && tag.parameter {
        print!("\tparameter:");
    }
    println!();
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    if args.list_kinds {
        list_kinds();
        return Ok(());
    }
    if args.files.is_empty() {
        bail!("no input files");
    }

    let sm = SourceManager::new();
    for path in &args.files {
        let lang = match args.language {
            Some(lang) => lang,
            None => {
                let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
                match Lang::from_extension(ext) {
                    Some(lang) => lang,
                    None => bail!("cannot infer language of {}", path.display()),
                }
            }
        };
        let text = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        let chunk = sm.add_file(path.to_string_lossy(), text);

        let mut options = ScanOptions::new(lang);
        if let Some(ref kinds) = args.kinds {
            apply_kinds(&mut options, lang, kinds)?;
        }
        if let Some(ref extras) = args.extras {
            options.qualified_tags = extras.contains('q') && extras.contains('+');
        }
        if let Some(ref fields) = args.fields {
            options.parameter_field = fields.contains("+parameter");
        }

        let store = TagStore::new();
        scan_chunk(chunk, lang, &options, &store);
        for tag in store.into_vec() {
            print_tag(&chunk.file_name, &options, &tag);
        }
    }
    Ok(())
}
