mod models_tests;
mod utils;
