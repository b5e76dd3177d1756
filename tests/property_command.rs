// tests/property_command.rs

use std::path::PathBuf;

use proptest::prelude::*;
use gerris_wrapper::config::ConfigFile;
use gerris_wrapper::exec::{build_command, Mode, ResolvedPaths};

fn mode_strategy() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Run),
        (1usize..512).prop_map(|parts| Mode::Split { parts }),
        (1usize..512).prop_map(|blocks| Mode::Parallelize { blocks }),
        (1usize..512).prop_map(|ranks| Mode::ParallelRun { ranks }),
        "[a-z][a-z0-9_]{0,12}".prop_map(|name| Mode::Topology { name }),
    ]
}

// File names without path separators or whitespace.
fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,16}\\.(gfs|xyz)"
}

proptest! {
    #[test]
    fn prefix_is_identical_for_every_mode(mode in mode_strategy(), name in name_strategy()) {
        let paths = ResolvedPaths {
            input: PathBuf::from("/data").join(&name),
            input_name: name.clone(),
            working_dir: PathBuf::from("/data"),
        };

        let cmd = build_command(&ConfigFile::default(), &mode, &paths);

        prop_assert_eq!(&cmd.program, "docker");
        prop_assert_eq!(&cmd.args[..3], &["run", "--rm", "-v"]);
        prop_assert_eq!(&cmd.args[3], &format!("/data/{name}:/root/{name}"));
        prop_assert_eq!(&cmd.args[4], "-v");
        prop_assert_eq!(&cmd.args[5], "/data:/root");
        prop_assert_eq!(&cmd.args[6], "gerris");
    }

    #[test]
    fn counts_follow_their_flag(mode in mode_strategy()) {
        let paths = ResolvedPaths {
            input: PathBuf::from("/data/sim.gfs"),
            input_name: "sim.gfs".to_string(),
            working_dir: PathBuf::from("/data"),
        };

        let cmd = build_command(&ConfigFile::default(), &mode, &paths);
        let expected = match &mode {
            Mode::Split { parts } => Some(("-ms", *parts)),
            Mode::Parallelize { blocks } => Some(("-mb", *blocks)),
            Mode::ParallelRun { ranks } => Some(("-np", *ranks)),
            Mode::Run | Mode::Topology { .. } => None,
        };

        if let Some((flag, count)) = expected {
            let idx = cmd.args.iter().position(|a| a == flag);
            prop_assert!(idx.is_some(), "missing {} in {:?}", flag, cmd.args);
            let idx = idx.unwrap();
            prop_assert_eq!(&cmd.args[idx + 1], &count.to_string());
        }
    }
}
