mod api_endpoints_tests;
