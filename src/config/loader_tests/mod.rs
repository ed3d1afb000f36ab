mod fake_host;

mod discovery_tests;
