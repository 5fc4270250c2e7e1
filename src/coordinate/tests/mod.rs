mod ellipsoid_tests;
