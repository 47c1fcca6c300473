mod onboarding_step;
