mod toy_test;
