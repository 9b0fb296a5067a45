//! CLI command parsing and end-to-end tests.
//!
//! Tests cover argument parsing (via clap `try_parse_from`), the marked-state
//! helper, and the built `qsynth` binary run against temporary inputs.

// ============================================================================
// commands::common tests
// ============================================================================

mod common_tests {
    // The CLI is a binary crate, so the helper is mirrored here.

    /// Equivalent to commands::common::parse_marked_state
    fn parse_marked_state(text: &str, num_qubits: u32) -> anyhow::Result<u64> {
        let text = text.trim();
        if text.len() != num_qubits as usize {
            anyhow::bail!("expected {num_qubits} bits");
        }
        if !text.bytes().all(|b| b == b'0' || b == b'1') {
            anyhow::bail!("not a bit string");
        }
        Ok(u64::from_str_radix(text, 2)?)
    }

    #[test]
    fn test_marked_state_msb_first() {
        assert_eq!(parse_marked_state("110", 3).unwrap(), 6);
        assert_eq!(parse_marked_state("001", 3).unwrap(), 1);
        assert_eq!(parse_marked_state(" 11 ", 2).unwrap(), 3);
    }

    #[test]
    fn test_marked_state_wrong_width() {
        assert!(parse_marked_state("11", 3).is_err());
        assert!(parse_marked_state("1010", 3).is_err());
    }

    #[test]
    fn test_marked_state_rejects_non_binary() {
        assert!(parse_marked_state("12", 2).is_err());
        assert!(parse_marked_state("+1", 2).is_err());
    }
}

// ============================================================================
// Clap argument parsing (test via try_parse_from on equivalent structs)
// ============================================================================

mod clap_parsing {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "qsynth")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[arg(long, global = true)]
        config: Option<PathBuf>,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Grover {
            #[arg(short, long)]
            qubits: u32,
            #[arg(short, long)]
            marked: Vec<String>,
            #[arg(short, long)]
            iterations: Option<u32>,
        },
        Qft {
            #[arg(short, long)]
            qubits: u32,
            #[arg(long)]
            inverse: bool,
        },
        Stabilizer {
            #[arg(short, long)]
            distance: u32,
        },
        Topology {
            #[arg(short, long)]
            distance: u32,
        },
        Decode {
            #[arg(short, long)]
            distance: u32,
            #[arg(short, long)]
            syndrome: String,
        },
        Validate {
            #[arg(short, long)]
            input: PathBuf,
            #[arg(long)]
            strict: bool,
        },
        Lower {
            #[arg(short, long)]
            input: PathBuf,
            #[arg(short, long)]
            provider: String,
        },
        Providers,
    }

    #[test]
    fn test_parse_grover_minimal() {
        let cli = TestCli::try_parse_from(["qsynth", "grover", "-q", "3"]).unwrap();
        match cli.command {
            TestCommands::Grover {
                qubits,
                marked,
                iterations,
            } => {
                assert_eq!(qubits, 3);
                assert!(marked.is_empty());
                assert!(iterations.is_none());
            }
            _ => panic!("Expected Grover command"),
        }
    }

    #[test]
    fn test_parse_grover_repeated_marked() {
        let cli = TestCli::try_parse_from([
            "qsynth", "grover", "--qubits", "2", "-m", "01", "--marked", "11", "-i", "0",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Grover {
                marked, iterations, ..
            } => {
                assert_eq!(marked, vec!["01", "11"]);
                assert_eq!(iterations, Some(0));
            }
            _ => panic!("Expected Grover command"),
        }
    }

    #[test]
    fn test_parse_grover_requires_qubits() {
        assert!(TestCli::try_parse_from(["qsynth", "grover"]).is_err());
    }

    #[test]
    fn test_parse_qft_inverse() {
        let cli = TestCli::try_parse_from(["qsynth", "qft", "-q", "4", "--inverse"]).unwrap();
        assert!(matches!(
            cli.command,
            TestCommands::Qft {
                qubits: 4,
                inverse: true
            }
        ));
    }

    #[test]
    fn test_parse_distance_commands() {
        let cli = TestCli::try_parse_from(["qsynth", "stabilizer", "-d", "5"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Stabilizer { distance: 5 }));

        let cli = TestCli::try_parse_from(["qsynth", "topology", "--distance", "7"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Topology { distance: 7 }));
    }

    #[test]
    fn test_parse_negative_distance_rejected() {
        assert!(TestCli::try_parse_from(["qsynth", "stabilizer", "-d", "-3"]).is_err());
    }

    #[test]
    fn test_parse_decode() {
        let cli =
            TestCli::try_parse_from(["qsynth", "decode", "-d", "3", "-s", "10000000"]).unwrap();
        match cli.command {
            TestCommands::Decode { distance, syndrome } => {
                assert_eq!(distance, 3);
                assert_eq!(syndrome, "10000000");
            }
            _ => panic!("Expected Decode command"),
        }
    }

    #[test]
    fn test_parse_validate_and_lower() {
        let cli = TestCli::try_parse_from(["qsynth", "validate", "-i", "c.json", "--strict"])
            .unwrap();
        match cli.command {
            TestCommands::Validate { input, strict } => {
                assert_eq!(input, PathBuf::from("c.json"));
                assert!(strict);
            }
            _ => panic!("Expected Validate command"),
        }

        let cli =
            TestCli::try_parse_from(["qsynth", "lower", "-i", "c.json", "-p", "rigetti"]).unwrap();
        match cli.command {
            TestCommands::Lower { provider, .. } => assert_eq!(provider, "rigetti"),
            _ => panic!("Expected Lower command"),
        }
    }

    #[test]
    fn test_parse_lower_requires_provider() {
        assert!(TestCli::try_parse_from(["qsynth", "lower", "-i", "c.json"]).is_err());
    }

    #[test]
    fn test_parse_global_flags() {
        let cli =
            TestCli::try_parse_from(["qsynth", "providers", "-vv", "--config", "q.yaml"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Providers));
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("q.yaml")));
    }

    #[test]
    fn test_no_subcommand() {
        assert!(TestCli::try_parse_from(["qsynth"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(TestCli::try_parse_from(["qsynth", "simulate"]).is_err());
    }
}

// ============================================================================
// Built binary
// ============================================================================

mod binary {
    use std::fs;
    use std::path::Path;
    use std::process::{Command, Output};

    use qsynth_ir::Circuit;
    use serde_json::Value;
    use tempfile::TempDir;

    const CONFIG: &str = "output:\n  pretty: false\n";

    /// Run `qsynth` in an isolated directory with a compact-output config.
    fn run(dir: &TempDir, args: &[&str]) -> Output {
        let config = dir.path().join("qsynth.yaml");
        if !config.exists() {
            fs::write(&config, CONFIG).unwrap();
        }

        let mut command = Command::new(env!("CARGO_BIN_EXE_qsynth"));
        for key in [
            "RUST_LOG",
            "QSYNTH_MAX_SEARCH_QUBITS",
            "QSYNTH_MAX_ITERATIONS",
            "QSYNTH_MAX_QFT_QUBITS",
            "QSYNTH_MAX_CODE_DISTANCE",
            "QSYNTH_LOG_LEVEL",
            "QSYNTH_LOG_FORMAT",
            "QSYNTH_OUTPUT_PRETTY",
        ] {
            command.env_remove(key);
        }
        command
            .current_dir(dir.path())
            .arg("--config")
            .arg(&config)
            .args(args)
            .output()
            .unwrap()
    }

    fn stdout_json(output: &Output) -> Value {
        assert!(
            output.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).unwrap()
    }

    fn write_circuit(dir: &Path, name: &str, circuit: &Circuit) -> String {
        let path = dir.join(name);
        fs::write(&path, circuit.to_json().unwrap()).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_grover_output_is_ir() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&dir, &["grover", "-q", "2", "-m", "11"]);
        let json = stdout_json(&output);

        assert_eq!(json["name"], "Grover Search");
        assert_eq!(json["qubits"], 2);
        assert_eq!(json["steps"], 4);

        let circuit = Circuit::from_json(&String::from_utf8(output.stdout).unwrap()).unwrap();
        assert_eq!(circuit.len(), 10);
    }

    #[test]
    fn test_grover_respects_configured_cap() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("qsynth.yaml"),
            "limits:\n  max_search_qubits: 4\noutput:\n  pretty: false\n",
        )
        .unwrap();

        let output = run(&dir, &["grover", "-q", "5"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Error:"));
    }

    #[test]
    fn test_grover_rejects_iterations_over_cap() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&dir, &["grover", "-q", "1", "-i", "2000000"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("exceed the cap of 1024"));

        fs::write(
            dir.path().join("qsynth.yaml"),
            "limits:\n  max_iterations: 2\noutput:\n  pretty: false\n",
        )
        .unwrap();
        assert!(!run(&dir, &["grover", "-q", "1", "-i", "3"]).status.success());
        let json = stdout_json(&run(&dir, &["grover", "-q", "1", "-i", "2"]));
        assert_eq!(json["steps"], 7);
    }

    #[test]
    fn test_grover_rejects_bad_marked_state() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&dir, &["grover", "-q", "2", "-m", "111"]);
        assert!(!output.status.success());
    }

    #[test]
    fn test_qft_step_count() {
        let dir = tempfile::tempdir().unwrap();
        let json = stdout_json(&run(&dir, &["qft", "-q", "3", "--inverse"]));
        assert_eq!(json["steps"], 6);
        assert_eq!(json["description"], "Inverse QFT on 3 qubits");
    }

    #[test]
    fn test_qft_rejects_width_over_cap() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&dir, &["qft", "-q", "3000"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("configured maximum of 256"));

        fs::write(
            dir.path().join("qsynth.yaml"),
            "limits:\n  max_qft_qubits: 4\noutput:\n  pretty: false\n",
        )
        .unwrap();
        assert!(!run(&dir, &["qft", "-q", "5"]).status.success());
        assert_eq!(stdout_json(&run(&dir, &["qft", "-q", "4"]))["steps"], 8);
    }

    #[test]
    fn test_stabilizer_distance_three() {
        let dir = tempfile::tempdir().unwrap();
        let json = stdout_json(&run(&dir, &["stabilizer", "-d", "3"]));
        assert_eq!(json["qubits"], 17);
        assert_eq!(json["steps"], 6);
    }

    #[test]
    fn test_topology_summary() {
        let dir = tempfile::tempdir().unwrap();
        let json = stdout_json(&run(&dir, &["topology", "-d", "3"]));
        assert_eq!(json["data_qubits"], 9);
        assert_eq!(json["syndrome_qubits"], 8);
        assert_eq!(json["total_qubits"], 17);
        assert_eq!(json["sites"].as_array().unwrap().len(), 8);
        assert_eq!(json["sites"][0]["neighbors"], serde_json::json!([0, 1, 3, 4]));
    }

    #[test]
    fn test_decode_single_flag() {
        let dir = tempfile::tempdir().unwrap();
        let json = stdout_json(&run(&dir, &["decode", "-d", "3", "-s", "10000000"]));
        assert_eq!(json, serde_json::json!([["X", 0]]));

        let json = stdout_json(&run(&dir, &["decode", "-d", "3", "-s", "00000000"]));
        assert_eq!(json, serde_json::json!([]));
    }

    #[test]
    fn test_decode_invalid_inputs() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!run(&dir, &["decode", "-d", "4", "-s", "0"]).status.success());
        assert!(!run(&dir, &["decode", "-d", "3", "-s", "10x"]).status.success());
        assert!(!run(&dir, &["decode", "-d", "53", "-s", "0"]).status.success());
    }

    #[test]
    fn test_validate_reports_step_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let circuit = qsynth_algo::grover_circuit(2, |_: &[bool]| false, None).unwrap();
        let path = write_circuit(dir.path(), "search.json", &circuit);

        let json = stdout_json(&run(&dir, &["validate", "-i", &path]));
        assert_eq!(json["steps_in_bounds"], false);
        assert_eq!(json["depth"], 6);

        let strict = run(&dir, &["validate", "-i", &path, "--strict"]);
        assert_eq!(strict.status.code(), Some(1));
    }

    #[test]
    fn test_validate_bell_in_bounds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_circuit(dir.path(), "bell.json", &Circuit::bell().unwrap());

        let json = stdout_json(&run(&dir, &["validate", "-i", &path, "--strict"]));
        assert_eq!(json["steps_in_bounds"], true);
        assert_eq!(json["gates"], 4);
        assert!(json.get("step_error").is_none());
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = run(&dir, &["validate", "-i", "absent.json"]);
        assert!(String::from_utf8_lossy(&output.stderr).contains("File not found"));
    }

    #[test]
    fn test_lower_bell_for_ibm() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_circuit(dir.path(), "bell.json", &Circuit::bell().unwrap());

        let json = stdout_json(&run(&dir, &["lower", "-i", &path, "-p", "ibm"]));
        assert_eq!(json["provider"], "ibm");
        assert_eq!(json["backend"], "ibmq_qasm_simulator");
        assert_eq!(json["operations"][0], serde_json::json!({"op": "h", "qubit": 0}));
        assert_eq!(json["operations"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_lower_bell_for_microsoft_skips_measurements() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_circuit(dir.path(), "bell.json", &Circuit::bell().unwrap());

        let json = stdout_json(&run(&dir, &["lower", "-i", &path, "-p", "microsoft"]));
        assert_eq!(json["operations"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["skipped"],
            serde_json::json!([
                {"index": 2, "kind": "MEASURE"},
                {"index": 3, "kind": "MEASURE"}
            ])
        );
    }

    #[test]
    fn test_lower_unknown_provider() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_circuit(dir.path(), "bell.json", &Circuit::bell().unwrap());
        let output = run(&dir, &["lower", "-i", &path, "-p", "dwave"]);
        assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown provider"));
    }

    #[test]
    fn test_providers_listing() {
        let dir = tempfile::tempdir().unwrap();
        let json = stdout_json(&run(&dir, &["providers"]));
        let providers: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["provider"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(providers, vec!["ibm", "rigetti", "google", "microsoft"]);
        assert_eq!(json[1]["default_backend"], "9q-square-qvm");
        assert_eq!(
            json[0]["gate_set"]["kinds"],
            serde_json::json!(["H", "X", "CNOT", "MEASURE"])
        );
        assert_eq!(
            json[3]["gate_set"]["kinds"],
            serde_json::json!(["H", "X", "CNOT"])
        );
    }

    #[test]
    fn test_invalid_config_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("qsynth.yaml"), "logging:\n  level: loud\n").unwrap();
        let output = run(&dir, &["providers"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid log level"));
    }
}
