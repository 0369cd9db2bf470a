mod predictor_test;
