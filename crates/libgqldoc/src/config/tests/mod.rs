mod docs_config_tests;
