// top navigation bar
pub const NAV: &str = r#"
with_roles = with roles:
admin = Admin
user = User
logout = Logout
refresh = Refresh
"#;

pub const ALERT: &str = r#"
close = Close
"#;

pub const CONFIRM: &str = r#"
yes = Yes
cancel = Cancel
"#;

pub const ADMIN: &str = r#"
title = Admin panel
users_tab = Users table
new_user_tab = New User
roles_tab = Roles
all_users = All users
add_new_user = Add new user
edit_user = Edit user
load_users_failed = Error loading users
load_roles_failed = Error loading roles
create_failed = Error creating user
update_failed = Error updating user
delete_failed = Error deleting user
user_not_found = User not found
confirm_title = Are you sure?
confirm_delete_user = This user will be permanently deleted!
confirm_delete_role = This role will be permanently deleted!
confirm_delete = Yes, delete!
role_create_failed = Error creating role
role_delete_failed = Error deleting role
done = Done
close = Close
"#;

pub const USERS_TABLE: &str = r#"
id = ID
first_name = First Name
last_name = Last Name
age = Age
email = Email
role = Role
edit = Edit
delete = Delete
no_users = No users found
loading = Loading...
"#;

pub const USER_FORM: &str = r#"
first_name = First name
last_name = Last name
age = Age
email = Email
password = Password
password_keep = Leave blank to keep the current password
role = Role
add_user = Add new user
save = Edit
close = Close
"#;

pub const PROFILE: &str = r#"
title = User information-page
about_user = About user
id = ID
first_name = First Name
last_name = Last Name
age = Age
email = Email
role = Role
no_roles = No roles assigned
edit_profile = Edit profile
load_failed = Error loading profile
update_failed = Error updating profile
done = Done
close = Close
"#;

pub const PROFILE_FORM: &str = r#"
title = Edit profile
first_name = First name
last_name = Last name
age = Age
email = Email
current_password = Current password
new_password = New password
password_hint = Fill in both fields to change your password
save = Save
close = Close
"#;

pub const ROLES: &str = r#"
id = ID
name = Name
description = Description
new_role = New role
add = Add
delete = Delete
no_roles = No roles found
"#;
