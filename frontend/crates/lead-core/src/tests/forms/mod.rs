mod signup_form;
