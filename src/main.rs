use std::env;
use std::fs;
use std::process;

use fretvoice::{format_voicing, RawRequest, VoicingOptions};

fn usage() -> ! {
    eprintln!("Usage: fretvoice <chord> [options]");
    eprintln!("       fretvoice --request <request.yaml> [options]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tuning <name|notes>   tuning name (standard, drop-d, dadgad, ...)");
    eprintln!("                          or a note list like 'D A D G A D'");
    eprintln!("  --capo <n>              capo fret (default 0)");
    eprintln!("  --bass <note>           force a bass note (overrides a slash bass)");
    eprintln!("  --limit <n>             print at most n voicings");
    eprintln!("  --yaml                  emit the result set as YAML");
    process::exit(1);
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    let mut chord: Option<String> = None;
    let mut request: Option<RawRequest> = None;
    let mut tuning_text: Option<String> = None;
    let mut capo: Option<u8> = None;
    let mut bass_text: Option<String> = None;
    let mut limit: Option<usize> = None;
    let mut yaml_output = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--request" => {
                let path = args.get(i + 1).unwrap_or_else(|| usage());
                let source = match fs::read_to_string(path) {
                    Ok(content) => content,
                    Err(e) => {
                        eprintln!("Error reading file '{}': {}", path, e);
                        process::exit(1);
                    }
                };
                match RawRequest::from_yaml(&source) {
                    Ok(parsed) => request = Some(parsed),
                    Err(e) => {
                        eprintln!("Error in '{}': {}", path, e);
                        process::exit(1);
                    }
                }
                i += 2;
            }
            "--tuning" => {
                tuning_text = Some(args.get(i + 1).unwrap_or_else(|| usage()).clone());
                i += 2;
            }
            "--capo" => {
                let value = args.get(i + 1).unwrap_or_else(|| usage());
                match value.parse() {
                    Ok(n) => capo = Some(n),
                    Err(_) => {
                        eprintln!("Invalid capo: '{}'", value);
                        process::exit(1);
                    }
                }
                i += 2;
            }
            "--bass" => {
                bass_text = Some(args.get(i + 1).unwrap_or_else(|| usage()).clone());
                i += 2;
            }
            "--limit" => {
                let value = args.get(i + 1).unwrap_or_else(|| usage());
                match value.parse() {
                    Ok(n) => limit = Some(n),
                    Err(_) => {
                        eprintln!("Invalid limit: '{}'", value);
                        process::exit(1);
                    }
                }
                i += 2;
            }
            "--yaml" => {
                yaml_output = true;
                i += 1;
            }
            arg if arg.starts_with("--") => usage(),
            arg => {
                if chord.is_some() {
                    usage();
                }
                chord = Some(arg.to_string());
                i += 1;
            }
        }
    }

    // Flags override request-file values
    let request = request.unwrap_or_default();
    let symbol = match chord.or(request.chord.clone()) {
        Some(symbol) => symbol,
        None => usage(),
    };
    let mut raw = RawRequest {
        chord: None,
        tuning: tuning_text.or(request.tuning),
        capo: capo.or(request.capo),
        bass: bass_text.or(request.bass),
        max_voicings: limit.or(request.max_voicings),
    };
    let max_voicings = raw.max_voicings.take();

    let (options, bass) = match raw.to_options() {
        Ok(resolved) => resolved,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let result = match run(&symbol, &options, bass) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut set = result;
    if let Some(max) = max_voicings {
        set.voicings.truncate(max);
    }

    if yaml_output {
        match serde_yaml::to_string(&set) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Error serializing result: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    if set.voicings.is_empty() {
        println!("No playable voicing found for {}", symbol);
        return;
    }

    println!(
        "{} on {} ({} voicing{}{})",
        symbol,
        describe_tuning(&options),
        set.voicings.len(),
        if set.voicings.len() == 1 { "" } else { "s" },
        if set.truncated { ", search truncated" } else { "" },
    );
    for voicing in &set.voicings {
        println!("  {}", format_voicing(voicing));
    }
}

fn run(
    symbol: &str,
    options: &VoicingOptions,
    bass_override: Option<u8>,
) -> Result<fretvoice::VoicingSet, fretvoice::VoicingError> {
    let spec = fretvoice::parse_chord_symbol(symbol)?;
    fretvoice::generate_voicings_with(
        spec.root,
        &spec.intervals,
        options.tuning.strings(),
        options.capo,
        bass_override.or(spec.bass),
        &options.search,
    )
}

fn describe_tuning(options: &VoicingOptions) -> String {
    let notes: Vec<&str> = options
        .tuning
        .strings()
        .iter()
        .map(|&pc| fretvoice::pitch_name(pc))
        .collect();
    let mut text = notes.join(" ");
    if options.capo > 0 {
        text.push_str(&format!(", capo {}", options.capo));
    }
    text
}
