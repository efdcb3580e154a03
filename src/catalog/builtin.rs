//! Built-in manager table.
//!
//! Templates use a standalone `x` as the package placeholder. Mutating
//! commands of system-wide managers are marked privileged.

use super::{ManagerDescriptor, Template, Templates};

const fn user(command: &'static str) -> Option<Template> {
    Some(Template {
        command,
        privileged: false,
    })
}

const fn root(command: &'static str) -> Option<Template> {
    Some(Template {
        command,
        privileged: true,
    })
}

/// Every supported manager, generic wrapper first.
pub static MANAGERS: &[ManagerDescriptor] = &[
    ManagerDescriptor {
        id: "i",
        binary: "i",
        templates: Templates {
            install: user("i install x"),
            uninstall: user("i uninstall x"),
            upgrade: user("i upgrade x"),
            upgrade_all: user("i upgrade"),
            search: user("i search x"),
            info: user("i info x"),
            list_installed: user("i list"),
            list_upgradable: user("i upgradable"),
            update_index: None,
        },
    },
    ManagerDescriptor {
        id: "apt",
        binary: "apt",
        templates: Templates {
            install: root("apt install x"),
            uninstall: root("apt remove x"),
            upgrade: root("apt install --only-upgrade x"),
            upgrade_all: root("apt upgrade"),
            search: user("apt search x"),
            info: user("apt show x"),
            list_installed: user("apt list --installed"),
            list_upgradable: user("apt list --upgradable"),
            update_index: root("apt update"),
        },
    },
    ManagerDescriptor {
        id: "brew",
        binary: "brew",
        templates: Templates {
            install: user("brew install x"),
            uninstall: user("brew uninstall x"),
            upgrade: user("brew upgrade x"),
            upgrade_all: user("brew upgrade"),
            search: user("brew search x"),
            info: user("brew info x"),
            list_installed: user("brew list"),
            list_upgradable: user("brew outdated"),
            update_index: user("brew update"),
        },
    },
    ManagerDescriptor {
        id: "flatpak",
        binary: "flatpak",
        templates: Templates {
            install: user("flatpak install x"),
            uninstall: user("flatpak uninstall x"),
            upgrade: user("flatpak update x"),
            upgrade_all: user("flatpak update"),
            search: user("flatpak search x"),
            info: user("flatpak info x"),
            list_installed: user("flatpak list"),
            list_upgradable: user("flatpak remote-ls --updates"),
            update_index: user("flatpak update --appstream"),
        },
    },
    ManagerDescriptor {
        id: "snap",
        binary: "snap",
        templates: Templates {
            install: root("snap install --classic x"),
            uninstall: root("snap remove x"),
            upgrade: root("snap refresh x"),
            upgrade_all: root("snap refresh"),
            search: user("snap find x"),
            info: user("snap info x"),
            list_installed: user("snap list"),
            list_upgradable: user("snap refresh --list"),
            update_index: None,
        },
    },
    ManagerDescriptor {
        id: "dnf",
        binary: "dnf",
        templates: Templates {
            install: root("dnf install -y x"),
            uninstall: root("dnf remove -y x"),
            upgrade: root("dnf upgrade -y x"),
            upgrade_all: root("dnf upgrade -y"),
            search: user("dnf search x"),
            info: user("dnf info x"),
            list_installed: user("dnf list --installed"),
            list_upgradable: user("dnf list --upgrades"),
            update_index: root("dnf makecache"),
        },
    },
    ManagerDescriptor {
        id: "pacman",
        binary: "pacman",
        templates: Templates {
            install: root("pacman -S --noconfirm x"),
            uninstall: root("pacman -Rs --noconfirm x"),
            upgrade: root("pacman -S --noconfirm x"),
            upgrade_all: root("pacman -Syu --noconfirm"),
            search: user("pacman -Ss x"),
            info: user("pacman -Si x"),
            list_installed: user("pacman -Q"),
            list_upgradable: user("pacman -Qu"),
            update_index: root("pacman -Sy"),
        },
    },
    ManagerDescriptor {
        id: "yum",
        binary: "yum",
        templates: Templates {
            install: root("yum install -y x"),
            uninstall: root("yum remove -y x"),
            upgrade: root("yum update -y x"),
            upgrade_all: root("yum update -y"),
            search: user("yum search x"),
            info: user("yum info x"),
            list_installed: user("yum list installed"),
            list_upgradable: user("yum list updates"),
            update_index: root("yum makecache"),
        },
    },
    ManagerDescriptor {
        id: "zypper",
        binary: "zypper",
        templates: Templates {
            install: root("zypper install -y x"),
            uninstall: root("zypper remove -y x"),
            upgrade: root("zypper update -y x"),
            upgrade_all: root("zypper update -y"),
            search: user("zypper search x"),
            info: user("zypper info x"),
            list_installed: user("zypper search --installed-only"),
            list_upgradable: user("zypper list-updates"),
            update_index: root("zypper refresh"),
        },
    },
    ManagerDescriptor {
        id: "apk",
        binary: "apk",
        templates: Templates {
            install: root("apk add x"),
            uninstall: root("apk del x"),
            upgrade: root("apk add --upgrade x"),
            upgrade_all: root("apk upgrade"),
            search: user("apk search x"),
            info: user("apk info x"),
            list_installed: user("apk info"),
            list_upgradable: user("apk version -l <"),
            update_index: root("apk update"),
        },
    },
    ManagerDescriptor {
        id: "xbps",
        binary: "xbps-install",
        templates: Templates {
            install: root("xbps-install -y x"),
            uninstall: root("xbps-remove -y x"),
            upgrade: root("xbps-install -yu x"),
            upgrade_all: root("xbps-install -Syu"),
            search: user("xbps-query -Rs x"),
            info: user("xbps-query -R x"),
            list_installed: user("xbps-query -l"),
            list_upgradable: user("xbps-install -nu"),
            update_index: root("xbps-install -S"),
        },
    },
    ManagerDescriptor {
        id: "emerge",
        binary: "emerge",
        templates: Templates {
            install: root("emerge x"),
            uninstall: root("emerge --depclean x"),
            upgrade: root("emerge --update x"),
            upgrade_all: root("emerge --update --deep --newuse @world"),
            search: user("emerge --search x"),
            info: user("emerge --pretend --verbose x"),
            list_installed: user("qlist -I"),
            list_upgradable: user("emerge --pretend --update --deep @world"),
            update_index: root("emerge --sync"),
        },
    },
    ManagerDescriptor {
        id: "nix-env",
        binary: "nix-env",
        templates: Templates {
            install: user("nix-env -iA nixpkgs.x"),
            uninstall: user("nix-env -e x"),
            upgrade: user("nix-env -uA nixpkgs.x"),
            upgrade_all: user("nix-env -u"),
            search: user("nix-env -qaP x"),
            info: user("nix-env -qa --description x"),
            list_installed: user("nix-env -q"),
            list_upgradable: user("nix-env -u --dry-run"),
            update_index: user("nix-channel --update"),
        },
    },
    ManagerDescriptor {
        id: "pkg",
        binary: "pkg",
        templates: Templates {
            install: root("pkg install -y x"),
            uninstall: root("pkg delete -y x"),
            upgrade: root("pkg upgrade -y x"),
            upgrade_all: root("pkg upgrade -y"),
            search: user("pkg search x"),
            info: user("pkg info x"),
            list_installed: user("pkg info"),
            list_upgradable: user("pkg version -vl <"),
            update_index: root("pkg update"),
        },
    },
    ManagerDescriptor {
        id: "port",
        binary: "port",
        templates: Templates {
            install: root("port install x"),
            uninstall: root("port uninstall x"),
            upgrade: root("port upgrade x"),
            upgrade_all: root("port upgrade outdated"),
            search: user("port search x"),
            info: user("port info x"),
            list_installed: user("port installed"),
            list_upgradable: user("port outdated"),
            update_index: root("port selfupdate"),
        },
    },
    ManagerDescriptor {
        id: "winget",
        binary: "winget",
        templates: Templates {
            install: user("winget install x"),
            uninstall: user("winget uninstall x"),
            upgrade: user("winget upgrade x"),
            upgrade_all: user("winget upgrade --all"),
            search: user("winget search x"),
            info: user("winget show x"),
            list_installed: user("winget list"),
            list_upgradable: user("winget upgrade"),
            update_index: user("winget source update"),
        },
    },
    ManagerDescriptor {
        id: "scoop",
        binary: "scoop",
        templates: Templates {
            install: user("scoop install x"),
            uninstall: user("scoop uninstall x"),
            upgrade: user("scoop update x"),
            upgrade_all: user("scoop update *"),
            search: user("scoop search x"),
            info: user("scoop info x"),
            list_installed: user("scoop list"),
            list_upgradable: user("scoop status"),
            update_index: user("scoop update"),
        },
    },
    ManagerDescriptor {
        id: "choco",
        binary: "choco",
        templates: Templates {
            install: user("choco install -y x"),
            uninstall: user("choco uninstall -y x"),
            upgrade: user("choco upgrade -y x"),
            upgrade_all: user("choco upgrade all -y"),
            search: user("choco search x"),
            info: user("choco info x"),
            list_installed: user("choco list"),
            list_upgradable: user("choco outdated"),
            update_index: None,
        },
    },
];
