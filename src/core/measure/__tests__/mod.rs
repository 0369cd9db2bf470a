mod functions_test;
