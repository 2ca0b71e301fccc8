// tests/command_builder.rs
mod common;
use crate::common::init_tracing;

use std::path::Path;

use aerender::command::FLAG_ORDER;
use aerender::{AerenderWrapper, CloseFlag, RenderOptions, SoundFlag, VerboseFlag, build_command};
use aerender_test_utils::builders::{golden_exe, golden_options};

#[cfg(not(windows))]
const GOLDEN: &str = r#""C:/Program Files/Adobe/Adobe After Effects CC 2019/Support Files/aerender.exe" -project "C:/Program Files/adobe/Desktop/project" -comp "Composition name" -OMtemplate "output template" -output "C:/Program Files/adobe/Desktop/movie.mov""#;

#[cfg(windows)]
const GOLDEN: &str = r#""C:\Program Files\Adobe\Adobe After Effects CC 2019\Support Files\aerender.exe" -project "C:\Program Files\adobe\Desktop\project" -comp "Composition name" -OMtemplate "output template" -output "C:\Program Files\adobe\Desktop\movie.mov""#;

#[test]
fn golden_command_line() {
    init_tracing();

    assert_eq!(build_command(&golden_exe(), &golden_options()), GOLDEN);

    let wrapper = AerenderWrapper::new(golden_exe());
    assert_eq!(wrapper.command(&golden_options()), GOLDEN);
}

#[test]
fn every_option_set_at_once_follows_canonical_order() {
    init_tracing();

    let opts = RenderOptions {
        reuse: true,
        project_path: Some("proj.aep".into()),
        project_name: Some("Team".into()),
        comp_name: Some("Comp 1".into()),
        index_in_render_queue: Some(2),
        render_settings_template: Some("Best Settings".into()),
        output_module_template: Some("Lossless".into()),
        output_path: Some("out.mov".into()),
        logfile_path: Some("render.log".into()),
        start_frame: Some(1),
        end_frame: Some(48),
        increment: Some(2),
        image_cache_percent: Some(30),
        max_mem_percent: Some(70),
        verbose_flag: Some(VerboseFlag::ErrorsAndProgress),
        close_flag: Some(CloseFlag::DoNotClose),
        sound_flag: Some(SoundFlag::Off),
        continue_on_missing_footage: true,
        version: true,
    };

    let cmd = build_command(Path::new("ae"), &opts);
    assert_eq!(
        cmd,
        "\"ae\" -reuse -project \"proj.aep\" -teamproject \"Team\" -comp \"Comp 1\" \
         -rqindex 2 -RStemplate \"Best Settings\" -OMtemplate \"Lossless\" \
         -output \"out.mov\" -log \"render.log\" -s 1 -e 48 -i 2 -mem_usage 30 70 \
         -v ERRORS_AND_PROGRESS -close DO_NOT_CLOSE -sound OFF \
         -continueOnMissingFootage -version"
    );

    // Each known flag shows up exactly once, in FLAG_ORDER.
    let positions: Vec<usize> = FLAG_ORDER
        .iter()
        .map(|flag| {
            let needle = format!(" {flag}");
            let mut found = cmd.match_indices(&needle).filter(|(i, _)| {
                let end = i + needle.len();
                end == cmd.len() || cmd[end..].starts_with(' ')
            });
            let (pos, _) = found.next().unwrap_or_else(|| panic!("{flag} missing"));
            assert!(found.next().is_none(), "{flag} emitted twice");
            pos
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn lone_memory_percentage_omits_mem_usage() {
    let cache_only = RenderOptions {
        comp_name: Some("Main".into()),
        image_cache_percent: Some(25),
        ..Default::default()
    };
    assert_eq!(
        build_command(Path::new("ae"), &cache_only),
        "\"ae\" -comp \"Main\""
    );

    let max_only = RenderOptions {
        comp_name: Some("Main".into()),
        max_mem_percent: Some(90),
        ..Default::default()
    };
    assert_eq!(
        build_command(Path::new("ae"), &max_only),
        "\"ae\" -comp \"Main\""
    );
}

#[test]
fn invalid_enum_values_fail_before_a_command_exists() {
    // The enum fields can only hold valid values; the string forms are
    // rejected at parse time, so there is nothing to build or spawn.
    assert!("VERBOSE".parse::<VerboseFlag>().is_err());
    assert!("CLOSE_EVERYTHING".parse::<CloseFlag>().is_err());
    assert!("MAYBE".parse::<SoundFlag>().is_err());
}
