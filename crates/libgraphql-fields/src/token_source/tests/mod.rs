mod tokenize_tests;
