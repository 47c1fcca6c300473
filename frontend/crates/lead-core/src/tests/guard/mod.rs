mod guard_decision;
