mod region_tests;
