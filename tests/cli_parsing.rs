// tests/cli_parsing.rs

use std::path::PathBuf;

use clap::Parser;
use gerris_wrapper::cli::{CliArgs, CliCommand};

#[test]
fn split_defaults_to_two_parts_and_current_dir() {
    let args = CliArgs::try_parse_from(["gerris-wrapper", "split", "sim.gfs", "-o", "out.log"])
        .unwrap();

    match args.command {
        CliCommand::Split { sim, parts } => {
            assert_eq!(parts, 2);
            assert_eq!(sim.gfs_file, PathBuf::from("sim.gfs"));
            assert_eq!(sim.output, PathBuf::from("out.log"));
            assert_eq!(sim.working_dir, PathBuf::from("."));
        }
        other => panic!("Expected Split, got: {:?}", other),
    }
}

#[test]
fn global_flags_follow_subcommand() {
    let args = CliArgs::try_parse_from([
        "gerris-wrapper",
        "prun",
        "sim.gfs",
        "--output",
        "out.log",
        "-n",
        "6",
        "--dry-run",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert!(args.dry_run);
    assert!(args.log_level.is_some());
    assert!(matches!(args.command, CliCommand::Prun { ranks: Some(6), .. }));
}

#[test]
fn output_is_required_for_simulations() {
    assert!(CliArgs::try_parse_from(["gerris-wrapper", "run", "sim.gfs"]).is_err());
}

#[test]
fn topo_needs_exactly_one_source() {
    assert!(CliArgs::try_parse_from(["gerris-wrapper", "topo", "bathy"]).is_err());
    assert!(CliArgs::try_parse_from([
        "gerris-wrapper",
        "topo",
        "bathy",
        "--xyz",
        "p.xyz",
        "--asc",
        "d.asc"
    ])
    .is_err());

    let args =
        CliArgs::try_parse_from(["gerris-wrapper", "topo", "bathy", "--asc", "d.asc", "-w", "run"])
            .unwrap();
    match args.command {
        CliCommand::Topo(topo) => {
            assert_eq!(topo.name, "bathy");
            assert_eq!(topo.asc, Some(PathBuf::from("d.asc")));
            assert_eq!(topo.xyz, None);
            assert_eq!(topo.working_dir, PathBuf::from("run"));
        }
        other => panic!("Expected Topo, got: {:?}", other),
    }
}
