mod limits_tests;
