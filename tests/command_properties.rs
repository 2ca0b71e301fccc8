// tests/command_properties.rs

use std::path::{Path, PathBuf};

use proptest::option;
use proptest::prelude::*;
use proptest::sample::select;

use aerender::command::FLAG_ORDER;
use aerender::{CloseFlag, RenderOptions, SoundFlag, VerboseFlag, build_command};

fn name() -> impl Strategy<Value = Option<String>> {
    option::of("[A-Za-z0-9 _.]{1,16}")
}

fn path() -> impl Strategy<Value = Option<PathBuf>> {
    option::of("[A-Za-z0-9 _/.]{1,24}".prop_map(PathBuf::from))
}

fn number() -> impl Strategy<Value = Option<u32>> {
    option::of(0u32..100_000)
}

fn percent() -> impl Strategy<Value = Option<u32>> {
    option::of(1u32..=100)
}

// Tuples of strategies top out at 12 elements, so the fields are split in two.
fn options_strategy() -> impl Strategy<Value = RenderOptions> {
    let first = (
        any::<bool>(),
        path(),
        name(),
        name(),
        number(),
        name(),
        name(),
        path(),
        path(),
    );
    let second = (
        number(),
        number(),
        number(),
        percent(),
        percent(),
        option::of(select(VerboseFlag::ALL.to_vec())),
        option::of(select(CloseFlag::ALL.to_vec())),
        option::of(select(SoundFlag::ALL.to_vec())),
        any::<bool>(),
        any::<bool>(),
    );

    (first, second).prop_map(
        |(
            (
                reuse,
                project_path,
                project_name,
                comp_name,
                index_in_render_queue,
                render_settings_template,
                output_module_template,
                output_path,
                logfile_path,
            ),
            (
                start_frame,
                end_frame,
                increment,
                image_cache_percent,
                max_mem_percent,
                verbose_flag,
                close_flag,
                sound_flag,
                continue_on_missing_footage,
                version,
            ),
        )| RenderOptions {
            reuse,
            project_path,
            project_name,
            comp_name,
            index_in_render_queue,
            render_settings_template,
            output_module_template,
            output_path,
            logfile_path,
            start_frame,
            end_frame,
            increment,
            image_cache_percent,
            max_mem_percent,
            verbose_flag,
            close_flag,
            sound_flag,
            continue_on_missing_footage,
            version,
        },
    )
}

/// Split on spaces outside double quotes.
fn tokens(cmd: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in cmd.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    out
}

fn expected_flags(o: &RenderOptions) -> Vec<&'static str> {
    let present = [
        o.reuse,
        o.project_path.is_some(),
        o.project_name.is_some(),
        o.comp_name.is_some(),
        o.index_in_render_queue.is_some(),
        o.render_settings_template.is_some(),
        o.output_module_template.is_some(),
        o.output_path.is_some(),
        o.logfile_path.is_some(),
        o.start_frame.is_some(),
        o.end_frame.is_some(),
        o.increment.is_some(),
        o.image_cache_percent.is_some() && o.max_mem_percent.is_some(),
        o.verbose_flag.is_some(),
        o.close_flag.is_some(),
        o.sound_flag.is_some(),
        o.continue_on_missing_footage,
        o.version,
    ];

    FLAG_ORDER
        .iter()
        .zip(present)
        .filter(|(_, present)| *present)
        .map(|(flag, _)| *flag)
        .collect()
}

fn quoted_option_count(o: &RenderOptions) -> usize {
    [
        o.project_path.is_some(),
        o.project_name.is_some(),
        o.comp_name.is_some(),
        o.render_settings_template.is_some(),
        o.output_module_template.is_some(),
        o.output_path.is_some(),
        o.logfile_path.is_some(),
    ]
    .iter()
    .filter(|p| **p)
    .count()
}

proptest! {
    #[test]
    fn one_flag_per_present_option_in_canonical_order(opts in options_strategy()) {
        let cmd = build_command(Path::new("aerender"), &opts);
        let toks = tokens(&cmd);

        prop_assert_eq!(toks[0].as_str(), "\"aerender\"");

        let flags: Vec<&str> = toks
            .iter()
            .filter(|t| t.starts_with('-'))
            .map(|t| t.as_str())
            .collect();
        prop_assert_eq!(flags, expected_flags(&opts));

        // Executable plus every path/name option: one balanced pair of quotes each.
        let quotes = cmd.matches('"').count();
        prop_assert_eq!(quotes, 2 * (1 + quoted_option_count(&opts)));
    }

    #[test]
    fn mem_usage_only_with_both_percentages(
        cache in percent(),
        max in percent(),
    ) {
        let opts = RenderOptions {
            image_cache_percent: cache,
            max_mem_percent: max,
            ..Default::default()
        };
        let cmd = build_command(Path::new("ae"), &opts);

        match (cache, max) {
            (Some(c), Some(m)) => {
                prop_assert_eq!(cmd, format!("\"ae\" -mem_usage {c} {m}"));
            }
            _ => prop_assert_eq!(cmd.as_str(), "\"ae\""),
        }
    }

    #[test]
    fn building_is_deterministic(opts in options_strategy()) {
        let exe = Path::new("aerender");
        prop_assert_eq!(build_command(exe, &opts), build_command(exe, &opts.clone()));
    }
}
