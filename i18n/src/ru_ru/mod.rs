// top navigation bar
pub const NAV: &str = r#"
with_roles = с ролями:
admin = Администратор
user = Пользователь
logout = Выйти
refresh = Обновить
"#;

pub const ALERT: &str = r#"
close = Закрыть
"#;

pub const CONFIRM: &str = r#"
yes = Да
cancel = Отмена
"#;

pub const ADMIN: &str = r#"
title = Панель администратора
users_tab = Пользователи
new_user_tab = Новый пользователь
roles_tab = Роли
all_users = Все пользователи
add_new_user = Добавить пользователя
edit_user = Редактировать пользователя
load_users_failed = Ошибка загрузки пользователей
load_roles_failed = Ошибка загрузки ролей
create_failed = Ошибка создания пользователя
update_failed = Ошибка обновления пользователя
delete_failed = Ошибка удаления пользователя
user_not_found = Пользователь не найден
confirm_title = Вы уверены?
confirm_delete_user = Пользователь будет удалён безвозвратно!
confirm_delete_role = Роль будет удалена безвозвратно!
confirm_delete = Да, удалить!
role_create_failed = Ошибка создания роли
role_delete_failed = Ошибка удаления роли
done = Готово
close = Закрыть
"#;

pub const USERS_TABLE: &str = r#"
id = ID
first_name = Имя
last_name = Фамилия
age = Возраст
email = Почта
role = Роль
edit = Изменить
delete = Удалить
no_users = Пользователи не найдены
loading = Загрузка...
"#;

pub const USER_FORM: &str = r#"
first_name = Имя
last_name = Фамилия
age = Возраст
email = Почта
password = Пароль
password_keep = Оставьте пустым, чтобы сохранить текущий пароль
role = Роль
add_user = Добавить пользователя
save = Сохранить
close = Закрыть
"#;

pub const PROFILE: &str = r#"
title = Страница пользователя
about_user = О пользователе
id = ID
first_name = Имя
last_name = Фамилия
age = Возраст
email = Почта
role = Роль
no_roles = Роли не назначены
edit_profile = Редактировать профиль
load_failed = Ошибка загрузки профиля
update_failed = Ошибка обновления профиля
done = Готово
close = Закрыть
"#;

pub const PROFILE_FORM: &str = r#"
title = Редактирование профиля
first_name = Имя
last_name = Фамилия
age = Возраст
email = Почта
current_password = Текущий пароль
new_password = Новый пароль
password_hint = Заполните оба поля, чтобы сменить пароль
save = Сохранить
close = Закрыть
"#;

pub const ROLES: &str = r#"
id = ID
name = Название
description = Описание
new_role = Новая роль
add = Добавить
delete = Удалить
no_roles = Роли не найдены
"#;
