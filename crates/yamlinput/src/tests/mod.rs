mod property_equivalence;
