mod example_tables_tests;
