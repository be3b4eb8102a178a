mod identify_tests;
mod mocks;
