use std::{fs, io::Write, time::Instant};
use testlog::{LogFile, LogFileConfig};

const LINES_PER_PASS: u64 = 1_000_000;
const APPEND_PASSES: u64 = 5;

fn main() {
    let env = env_logger::Env::new().default_filter_or("info");
    let _ = env_logger::try_init_from_env(env);

    let location = "./test-logs/bench";
    let _ = fs::remove_dir_all(location);
    fs::create_dir_all(location).unwrap();

    // Random suffix, like a harness tagging each run
    let suffix = format!("run{}", rand::random::<u32>());
    let config = LogFileConfig::new()
        .with_directory(location)
        .with_suffix(Some(suffix.as_str()));

    let start = Instant::now();
    let mut total_lines = 0;

    for pass in 0..=APPEND_PASSES {
        let is_new_file = pass == 0;
        let mut log = LogFile::open("Bench", true, is_new_file, &config).unwrap();

        for i in 0..LINES_PER_PASS {
            let value = rand::random::<u64>();
            writeln!(log, "pass {pass} line {i}: {value}").unwrap();
        }
        total_lines += LINES_PER_PASS;

        // Every other pass relies on drop to close the file
        if pass % 2 == 0 {
            log.close().unwrap();
        }
    }

    let elapsed = start.elapsed();
    let path = testlog::log_file_name("Bench", true, &config).unwrap();
    let size = fs::metadata(&path).unwrap().len();

    log::info!(
        "wrote {total_lines} lines ({size} bytes) to {path:?} in {elapsed:?} ({:.0} lines/s)",
        total_lines as f64 / elapsed.as_secs_f64()
    );

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with('\u{FEFF}'));
    assert_eq!(content.lines().count() as u64, total_lines);
}
