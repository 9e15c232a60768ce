pub const TEST_FILES_DIRECTORY: &str = "tests/test_files";

pub const TEST_DATA_FILES_DIRECTORY: &str = "tests/test_data_files";
