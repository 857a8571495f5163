use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::NewUser;

pub const DEFAULT_AVATAR: &str = "https://reqres.in/img/faces/8-image.jpg";

const LAST_NAMES: [&str; 16] = [
    "Иванов",
    "Смирнов",
    "Кузнецов",
    "Попов",
    "Васильев",
    "Петров",
    "Соколов",
    "Михайлов",
    "Новиков",
    "Федоров",
    "Морозов",
    "Волков",
    "Алексеев",
    "Лебедев",
    "Семенов",
    "Егоров",
];

const FIRST_NAMES: [&str; 16] = [
    "Иван",
    "Алексей",
    "Дмитрий",
    "Сергей",
    "Андрей",
    "Михаил",
    "Николай",
    "Павел",
    "Олег",
    "Владимир",
    "Анна",
    "Мария",
    "Елена",
    "Ольга",
    "Татьяна",
    "Наталья",
];

const LATIN_FIRST_NAMES: [&str; 16] = [
    "James",
    "Mary",
    "Robert",
    "Patricia",
    "John",
    "Jennifer",
    "Michael",
    "Linda",
    "David",
    "Elizabeth",
    "William",
    "Barbara",
    "Richard",
    "Susan",
    "Joseph",
    "Jessica",
];

const FREE_MAIL_DOMAINS: [&str; 6] = [
    "gmail.com",
    "yandex.ru",
    "mail.ru",
    "rambler.ru",
    "hotmail.com",
    "yahoo.com",
];

/// A fresh user with Cyrillic names, an ASCII free-mail address and the
/// default avatar.
pub fn random_user<R>(rng: &mut R) -> NewUser
where
    R: Rng + ?Sized,
{
    NewUser {
        last_name: pick(rng, &LAST_NAMES).to_owned(),
        first_name: pick(rng, &FIRST_NAMES).to_owned(),
        email: random_email(rng),
        avatar: DEFAULT_AVATAR.to_owned(),
    }
}

/// A Latin first name; never collides with the Cyrillic names of
/// [`random_user`].
pub fn random_first_name<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    pick(rng, &LATIN_FIRST_NAMES).to_owned()
}

fn random_email<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    let len = rng.gen_range(6..=10);
    let local: String = (0..len)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect();
    let suffix: u16 = rng.gen_range(0..1000);
    format!("{}{}@{}", local, suffix, pick(rng, &FREE_MAIL_DOMAINS))
}

fn pick<'list, R>(rng: &mut R, values: &'list [&'static str]) -> &'list str
where
    R: Rng + ?Sized,
{
    values.choose(rng).copied().unwrap_or_default()
}
