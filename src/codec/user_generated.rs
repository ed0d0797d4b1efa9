//! FlatBuffers bindings for `schemas/user.fbs`
//!
//! Checked in rather than produced by `flatc` at build time. Field slots
//! follow declaration order in the schema.

#![allow(missing_docs, clippy::needless_lifetimes)]

use flatbuffers::{
    FlatBufferBuilder, Follow, ForwardsUOffset, InvalidFlatbuffer, Table, VOffsetT, Vector,
    Verifiable, Verifier, WIPOffset,
};

#[derive(Copy, Clone, PartialEq)]
pub struct User<'a> {
    pub _tab: Table<'a>,
}

impl<'a> Follow<'a> for User<'a> {
    type Inner = User<'a>;

    #[inline]
    unsafe fn follow(buf: &'a [u8], loc: usize) -> Self::Inner {
        Self {
            _tab: unsafe { Table::new(buf, loc) },
        }
    }
}

impl<'a> User<'a> {
    pub const VT_ID: VOffsetT = 4;
    pub const VT_NAME: VOffsetT = 6;
    pub const VT_EMAIL: VOffsetT = 8;
    pub const VT_AGE: VOffsetT = 10;
    pub const VT_ACTIVE: VOffsetT = 12;
    pub const VT_ROLES: VOffsetT = 14;
    pub const VT_BALANCE: VOffsetT = 16;

    /// Write a `User` table whose strings and role vector are already in `fbb`
    pub fn create<'bldr: 'args, 'args: 'mut_bldr, 'mut_bldr>(
        fbb: &'mut_bldr mut FlatBufferBuilder<'bldr>,
        args: &'args UserArgs<'args>,
    ) -> WIPOffset<User<'bldr>> {
        let mut builder = UserBuilder::new(fbb);
        builder.add_balance(args.balance);
        if let Some(x) = args.roles {
            builder.add_roles(x);
        }
        if let Some(x) = args.email {
            builder.add_email(x);
        }
        if let Some(x) = args.name {
            builder.add_name(x);
        }
        if let Some(x) = args.id {
            builder.add_id(x);
        }
        builder.add_age(args.age);
        builder.add_active(args.active);
        builder.finish()
    }

    #[inline]
    pub fn id(&self) -> Option<&'a str> {
        unsafe { self._tab.get::<ForwardsUOffset<&str>>(User::VT_ID, None) }
    }

    #[inline]
    pub fn name(&self) -> Option<&'a str> {
        unsafe { self._tab.get::<ForwardsUOffset<&str>>(User::VT_NAME, None) }
    }

    #[inline]
    pub fn email(&self) -> Option<&'a str> {
        unsafe { self._tab.get::<ForwardsUOffset<&str>>(User::VT_EMAIL, None) }
    }

    #[inline]
    pub fn age(&self) -> i32 {
        unsafe { self._tab.get::<i32>(User::VT_AGE, Some(0)).unwrap_or(0) }
    }

    #[inline]
    pub fn active(&self) -> bool {
        unsafe { self._tab.get::<bool>(User::VT_ACTIVE, Some(false)).unwrap_or(false) }
    }

    #[inline]
    pub fn roles(&self) -> Option<Vector<'a, ForwardsUOffset<&'a str>>> {
        unsafe {
            self._tab
                .get::<ForwardsUOffset<Vector<'a, ForwardsUOffset<&'a str>>>>(User::VT_ROLES, None)
        }
    }

    #[inline]
    pub fn balance(&self) -> f64 {
        unsafe { self._tab.get::<f64>(User::VT_BALANCE, Some(0.0)).unwrap_or(0.0) }
    }
}

impl Verifiable for User<'_> {
    #[inline]
    fn run_verifier(v: &mut Verifier, pos: usize) -> Result<(), InvalidFlatbuffer> {
        v.visit_table(pos)?
            .visit_field::<ForwardsUOffset<&str>>("id", Self::VT_ID, false)?
            .visit_field::<ForwardsUOffset<&str>>("name", Self::VT_NAME, false)?
            .visit_field::<ForwardsUOffset<&str>>("email", Self::VT_EMAIL, false)?
            .visit_field::<i32>("age", Self::VT_AGE, false)?
            .visit_field::<bool>("active", Self::VT_ACTIVE, false)?
            .visit_field::<ForwardsUOffset<Vector<'_, ForwardsUOffset<&'_ str>>>>(
                "roles",
                Self::VT_ROLES,
                false,
            )?
            .visit_field::<f64>("balance", Self::VT_BALANCE, false)?
            .finish();
        Ok(())
    }
}

pub struct UserArgs<'a> {
    pub id: Option<WIPOffset<&'a str>>,
    pub name: Option<WIPOffset<&'a str>>,
    pub email: Option<WIPOffset<&'a str>>,
    pub age: i32,
    pub active: bool,
    pub roles: Option<WIPOffset<Vector<'a, ForwardsUOffset<&'a str>>>>,
    pub balance: f64,
}

impl<'a> Default for UserArgs<'a> {
    #[inline]
    fn default() -> Self {
        UserArgs {
            id: None,
            name: None,
            email: None,
            age: 0,
            active: false,
            roles: None,
            balance: 0.0,
        }
    }
}

pub struct UserBuilder<'a: 'b, 'b> {
    fbb_: &'b mut FlatBufferBuilder<'a>,
    start_: WIPOffset<flatbuffers::TableUnfinishedWIPOffset>,
}

impl<'a: 'b, 'b> UserBuilder<'a, 'b> {
    #[inline]
    pub fn add_id(&mut self, id: WIPOffset<&'b str>) {
        self.fbb_.push_slot_always::<WIPOffset<_>>(User::VT_ID, id);
    }

    #[inline]
    pub fn add_name(&mut self, name: WIPOffset<&'b str>) {
        self.fbb_.push_slot_always::<WIPOffset<_>>(User::VT_NAME, name);
    }

    #[inline]
    pub fn add_email(&mut self, email: WIPOffset<&'b str>) {
        self.fbb_.push_slot_always::<WIPOffset<_>>(User::VT_EMAIL, email);
    }

    #[inline]
    pub fn add_age(&mut self, age: i32) {
        self.fbb_.push_slot::<i32>(User::VT_AGE, age, 0);
    }

    #[inline]
    pub fn add_active(&mut self, active: bool) {
        self.fbb_.push_slot::<bool>(User::VT_ACTIVE, active, false);
    }

    #[inline]
    pub fn add_roles(&mut self, roles: WIPOffset<Vector<'b, ForwardsUOffset<&'b str>>>) {
        self.fbb_.push_slot_always::<WIPOffset<_>>(User::VT_ROLES, roles);
    }

    #[inline]
    pub fn add_balance(&mut self, balance: f64) {
        self.fbb_.push_slot::<f64>(User::VT_BALANCE, balance, 0.0);
    }

    #[inline]
    pub fn new(fbb: &'b mut FlatBufferBuilder<'a>) -> UserBuilder<'a, 'b> {
        let start = fbb.start_table();
        UserBuilder {
            fbb_: fbb,
            start_: start,
        }
    }

    #[inline]
    pub fn finish(self) -> WIPOffset<User<'a>> {
        let o = self.fbb_.end_table(self.start_);
        WIPOffset::new(o.value())
    }
}

/// Verify `buf` and return its root `User` table
#[inline]
pub fn root_as_user(buf: &[u8]) -> Result<User<'_>, InvalidFlatbuffer> {
    flatbuffers::root::<User>(buf)
}
