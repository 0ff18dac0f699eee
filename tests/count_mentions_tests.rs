use std::fs::read_dir;

use test_utils::{run_count_test_for_file, TEST_FILES_DIRECTORY};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_mentions_from_annotated_files() {
        let entries = read_dir(TEST_FILES_DIRECTORY).expect("Failed to read test files directory");

        let mut file_count = 0;
        for entry in entries {
            let path = entry.expect("Failed to read directory entry").path();

            if path.extension().map_or(false, |ext| ext == "txt") {
                run_count_test_for_file(path.to_str().expect("Invalid test file path"));
                file_count += 1;
            }
        }

        assert!(file_count > 0, "No annotated test files were found");
    }
}
